use serde::{Deserialize, Serialize};

/// Successful OpenAPI response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResponse<T> {
    /// Metadata attached by the gateway.
    pub response_metadata: ResponseMetadata,
    /// Operation specific payload.
    pub result: T,
}

/// `ResponseMetadata` block shared by success and error envelopes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResponseMetadata {
    /// Request id assigned by the service.
    pub request_id: String,
    /// Action that was called.
    pub action: String,
    /// API version that served the request.
    pub version: String,
    /// Service that served the request.
    pub service: String,
    /// Region that served the request.
    pub region: String,
    /// Present only on failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// Error detail inside [`ResponseMetadata`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApiError {
    /// Machine readable error code.
    pub code: Option<String>,
    /// Human readable message.
    pub message: Option<String>,
}

/// Error envelope, every field may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct ErrorResponse {
    pub response_metadata: Option<ResponseMetadata>,
}
