// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! BytePlus OpenAPI signer
//!
//! Implements the `HMAC-SHA256` request signature used by BytePlus (Volcengine)
//! OpenAPI services such as `vke`.
//!
//! ## Example
//!
//! ```no_run
//! use bpsign_byteplus::{DefaultCredentialProvider, RequestSigner};
//! use bpsign_core::{Context, OsEnv, Result, Signer};
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let signer = Signer::new(
//!     ctx,
//!     DefaultCredentialProvider::new(),
//!     RequestSigner::new("vke", "ap-southeast-1"),
//! );
//!
//! let body = br#"{"Name":"cluster-name"}"#;
//! let mut parts = http::Request::post(
//!     "https://open.volcengineapi.com/?Action=CreateCluster&Version=2022-05-12",
//! )
//! .header("content-type", "application/json")
//! .body(())
//! .expect("request must be valid")
//! .into_parts()
//! .0;
//!
//! signer.sign(&mut parts, Some(body.as_slice())).await?;
//! # Ok(())
//! # }
//! ```

pub mod canonical;

mod config;
pub use config::Config;

mod constants;
pub use constants::{
    BYTEPLUS_ACCESS_KEY_ID, BYTEPLUS_SECRET_ACCESS_KEY, BYTEPLUS_SESSION_TOKEN, X_CONTENT_SHA256,
    X_DATE, X_SECURITY_TOKEN,
};

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{generate_signing_key, RequestSigner};

mod provide_credential;
pub use provide_credential::*;
