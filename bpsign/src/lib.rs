#![doc = include_str!("../README.md")]

pub use bpsign_core::{
    Context, Env, HttpSend, OsEnv, ProvideCredential, Signer, SigningCredential, StaticEnv,
};

/// BytePlus signing types.
pub mod byteplus {
    pub use bpsign_byteplus::*;
}

mod client;
pub use client::Client;

mod config;
pub use config::{Config, BYTEPLUS_HOST, BYTEPLUS_REGION, DEFAULT_HOST, DEFAULT_REGION};

mod error;
pub use error::{Error, ErrorKind, Result};

pub mod presets;

mod response;
pub use response::{ApiError, ApiResponse, ResponseMetadata};

use bpsign_http_send_reqwest::ReqwestHttpSend;
use std::time::Duration;

/// Timeout applied to every call sent through [`default_context`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Create a context that reads the process environment and sends requests with
/// a `reqwest::Client` bounded by [`DEFAULT_TIMEOUT`].
pub fn default_context() -> Result<Context> {
    let client = reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .map_err(|e| {
            Error::transport(
                bpsign_core::Error::unexpected("failed to build http client").with_source(e),
            )
        })?;

    Ok(Context::new()
        .with_http_send(ReqwestHttpSend::new(client))
        .with_env(OsEnv))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_reads_process_env() -> Result<()> {
        let ctx = default_context()?;
        assert_eq!(ctx.env_var("PATH"), std::env::var("PATH").ok());
        Ok(())
    }
}
