//! Core building blocks for signing BytePlus OpenAPI requests.
//!
//! The crate knows nothing about a concrete signature scheme. It provides:
//!
//! - [`Context`]: where environment variables come from and how bytes are sent.
//! - [`ProvideCredential`]: loads a credential, chained with [`ProvideCredentialChain`].
//! - [`SignRequest`]: mutates a request in place given a credential and the body.
//! - [`Signer`]: caches the credential and drives the two traits above.
//! - [`SigningRequest`]: the decoded request a signer works on.
//!
//! ## Example
//!
//! A signer that puts a static token into a header:
//!
//! ```no_run
//! use async_trait::async_trait;
//! use bpsign_core::{Context, ProvideCredential, Result, SignRequest, Signer, SigningCredential};
//! use http::request::Parts;
//!
//! #[derive(Clone, Debug)]
//! struct Token(String);
//!
//! impl SigningCredential for Token {
//!     fn is_valid(&self) -> bool {
//!         !self.0.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct EnvToken;
//!
//! #[async_trait]
//! impl ProvideCredential for EnvToken {
//!     type Credential = Token;
//!
//!     async fn provide_credential(&self, ctx: &Context) -> Result<Option<Token>> {
//!         Ok(ctx.env_var("MY_TOKEN").map(Token))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct TokenHeader;
//!
//! #[async_trait]
//! impl SignRequest for TokenHeader {
//!     type Credential = Token;
//!
//!     async fn sign_request(
//!         &self,
//!         _: &Context,
//!         req: &mut Parts,
//!         _: Option<&[u8]>,
//!         cred: Option<&Token>,
//!     ) -> Result<()> {
//!         if let Some(token) = cred {
//!             req.headers.insert("x-token", token.0.parse()?);
//!         }
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new().with_env(bpsign_core::OsEnv), EnvToken, TokenHeader);
//!
//! let mut parts = http::Request::post("https://open.volcengineapi.com/?Action=ListClusters&Version=2022-05-12")
//!     .body(())?
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts, Some(b"{}".as_slice())).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SignRequest, SigningCredential};

mod request;
pub use request::{QueryValue, SigningRequest};

mod signer;
pub use signer::Signer;
