use bpsign_byteplus::{Credential, DefaultCredentialProvider, RequestSigner};
use bpsign_core::{Context, ProvideCredential, Signer};
use bytes::Bytes;
use futures::future::join_all;
use http::header::CONTENT_TYPE;
use http::{HeaderName, HeaderValue, Method, Request};
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::response::ErrorResponse;
use crate::{default_context, ApiResponse, Config, Error, Result};

/// Client dispatches signed OpenAPI calls.
///
/// Each call is built, signed, sent and normalized independently. A client
/// holds no per-request state, so it can be cloned and shared between tasks.
#[derive(Clone, Debug)]
pub struct Client {
    config: Config,
    signer: Signer<Credential>,
}

impl Client {
    /// Create a new client.
    pub fn new(
        ctx: Context,
        config: Config,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Self {
        let builder = RequestSigner::new(&config.service, config.region());
        let signer = Signer::new(ctx, provider, builder);

        Self { config, signer }
    }

    /// Create a client on top of [`default_context`].
    ///
    /// Region and host are completed from the environment, credentials are
    /// loaded with [`DefaultCredentialProvider`].
    pub fn with_default_context(config: Config) -> Result<Self> {
        let ctx = default_context()?;
        let config = config.from_env(&ctx);

        Ok(Self::new(ctx, config, DefaultCredentialProvider::new()))
    }

    /// Get the config used by this client.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Call `action` with `params` as the JSON body.
    pub async fn send<P, T>(&self, action: &str, params: &P) -> Result<ApiResponse<T>>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(params)
            .map_err(|e| Error::decode(format!("failed to serialize {action} params"), e))?;

        let req = self.build_request(action, body).await?;

        debug!(
            "sending {action} to {}://{}",
            self.config.scheme(),
            self.config.host()
        );
        let resp = self
            .signer
            .context()
            .http_send(req)
            .await
            .map_err(Error::transport)?;

        let (parts, body) = resp.into_parts();
        if !parts.status.is_success() {
            return Err(normalize_api_error(action, parts.status, &body));
        }

        serde_json::from_slice(&body)
            .map_err(|e| Error::decode(format!("failed to decode {action} response"), e))
    }

    /// Call `action` once per element of `batch`, concurrently.
    ///
    /// Returns one result per element, in the same order. A failing call never
    /// cancels the others.
    pub async fn send_all<P, T>(&self, action: &str, batch: &[P]) -> Vec<Result<ApiResponse<T>>>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        join_all(batch.iter().map(|params| self.send(action, params))).await
    }

    async fn build_request(&self, action: &str, body: Vec<u8>) -> Result<Request<Bytes>> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("Action", action)
            .append_pair("Version", &self.config.version)
            .finish();
        let uri = format!(
            "{}://{}/?{query}",
            self.config.scheme(),
            self.config.host()
        );

        let (mut parts, ()) = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(())
            .map_err(|e| Error::signing(bpsign_core::Error::from(e)))?
            .into_parts();
        // Configured headers replace the defaults above.
        for (name, value) in &self.config.headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|e| Error::signing(bpsign_core::Error::from(e)))?;
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|e| Error::signing(bpsign_core::Error::from(e)))?;
            parts.headers.insert(name, value);
        }

        // The hashed bytes are the transmitted bytes.
        self.signer
            .sign(&mut parts, Some(body.as_slice()))
            .await
            .map_err(Error::signing)?;

        Ok(Request::from_parts(parts, Bytes::from(body)))
    }
}

fn normalize_api_error(action: &str, status: http::StatusCode, body: &[u8]) -> Error {
    let metadata = serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .and_then(|v| v.response_metadata);

    let (message, code, request_id) = match &metadata {
        Some(meta) => (
            meta.error.as_ref().and_then(|e| e.message.clone()),
            meta.error.as_ref().and_then(|e| e.code.clone()),
            Some(meta.request_id.clone()).filter(|v| !v.is_empty()),
        ),
        None => (None, None, None),
    };

    let err = Error::api(status.as_u16(), message, code, request_id);
    error!(
        "error in byteplus request {action}: {err:?}, response metadata: {metadata:?}, body: {}",
        String::from_utf8_lossy(body)
    );
    err
}
