use std::fmt;
use thiserror::Error;

/// Message used when the service gave no usable error message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// The normalized error returned by [`crate::Client`].
///
/// Whatever went wrong, callers get the same shape: a message, the service
/// error code and request id when the service answered, and the HTTP status
/// for API errors.
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    code: Option<String>,
    request_id: Option<String>,
    status_code: Option<u16>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response was received (DNS, connection reset, timeout).
    Transport,
    /// The service answered with a non-2xx status.
    Api,
    /// The request could not be built or signed.
    Signing,
    /// Parameters or the response body could not be converted from or to JSON.
    Decode,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Api => write!(f, "api error"),
            ErrorKind::Signing => write!(f, "signing error"),
            ErrorKind::Decode => write!(f, "decode error"),
        }
    }
}

impl Error {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            request_id: None,
            status_code: None,
            source: None,
        }
    }

    fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// No response was received. The message is always [`UNKNOWN_ERROR`] and the
    /// transport failure is kept as the source.
    pub(crate) fn transport(source: bpsign_core::Error) -> Self {
        Self::new(ErrorKind::Transport, UNKNOWN_ERROR).with_source(source)
    }

    /// The service answered with an error status.
    pub(crate) fn api(
        status_code: u16,
        message: Option<String>,
        code: Option<String>,
        request_id: Option<String>,
    ) -> Self {
        let message = message
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());

        Self {
            code,
            request_id,
            status_code: Some(status_code),
            ..Self::new(ErrorKind::Api, message)
        }
    }

    pub(crate) fn signing(source: bpsign_core::Error) -> Self {
        Self::new(ErrorKind::Signing, source.to_string()).with_source(source)
    }

    pub(crate) fn decode(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::new(ErrorKind::Decode, message).with_source(source)
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human readable message, [`UNKNOWN_ERROR`] when the service gave none.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Service error code, e.g. `InvalidParameter`.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Request id assigned by the service.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// HTTP status, only set for [`ErrorKind::Api`].
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_transport_error() {
        let err = Error::transport(bpsign_core::Error::unexpected("connection reset"));

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.message(), "Unknown error");
        assert_eq!(err.status_code(), None);
        assert_eq!(err.code(), None);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_api_error_fallback_message() {
        let err = Error::api(500, None, None, None);
        assert_eq!(err.message(), "Unknown error");
        assert_eq!(err.status_code(), Some(500));

        let err = Error::api(400, Some(String::new()), Some("Bad".to_string()), None);
        assert_eq!(err.message(), "Unknown error");
        assert_eq!(err.code(), Some("Bad"));
    }

    #[test]
    fn test_display() {
        let err = Error::api(
            403,
            Some("The request signature does not match".to_string()),
            Some("SignatureDoesNotMatch".to_string()),
            Some("2024010100000001".to_string()),
        );

        assert_eq!(
            err.to_string(),
            "api error: The request signature does not match"
        );
    }
}
