use std::fmt;
use thiserror::Error;

/// Error returned while loading credentials or signing a request.
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A credential was found but can't be used.
    CredentialInvalid,
    /// A signable header value isn't visible ASCII text.
    InvalidHeaderValue,
    /// The request can't be signed, e.g. it has no authority.
    RequestInvalid,
    /// A configuration value is missing or unknown.
    ConfigInvalid,
    /// Anything else, including transport failures.
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message without the kind prefix
    pub fn message(&self) -> &str {
        &self.message
    }
}

// Convenience constructors
impl Error {
    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create an invalid header value error
    pub fn invalid_header_value(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidHeaderValue, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::InvalidHeaderValue => write!(f, "invalid header value"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

/// Map foreign errors onto a kind, keeping them as the source.
macro_rules! impl_from_error {
    ($($err:ty => $kind:ident),* $(,)?) => {
        $(
            impl From<$err> for Error {
                fn from(err: $err) -> Self {
                    Self::new(ErrorKind::$kind, err.to_string()).with_source(err)
                }
            }
        )*
    };
}

impl_from_error! {
    std::fmt::Error => Unexpected,
    http::Error => RequestInvalid,
    http::header::InvalidHeaderName => RequestInvalid,
    http::header::InvalidHeaderValue => InvalidHeaderValue,
    http::header::ToStrError => InvalidHeaderValue,
    http::uri::InvalidUri => RequestInvalid,
    http::uri::InvalidUriParts => RequestInvalid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_invalid_uri_is_request_invalid() {
        let err: Error = "http://[::1"
            .parse::<http::Uri>()
            .expect_err("unclosed ipv6 literal")
            .into();

        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_to_str_error_is_invalid_header_value() {
        let value = HeaderValue::from_bytes(b"caf\xc3\xa9").expect("opaque bytes are accepted");
        let err: Error = value.to_str().expect_err("non visible ascii").into();

        assert_eq!(err.kind(), ErrorKind::InvalidHeaderValue);
        assert!(err.to_string().starts_with("invalid header value: "));
    }
}
