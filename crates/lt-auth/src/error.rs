//! Error types for lt-auth.
//!
//! Error messages never include the access key.

/// Result type alias for lt-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for lt-auth operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// Username is absent or empty.
    #[error("missing username")]
    MissingUsername,

    /// Access key is absent or empty.
    #[error("missing accessKey")]
    MissingAccessKey,

    /// Region is not one of the supported deployments.
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Region profile is malformed (e.g. unparsable URL template).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::MissingUsername.to_string(), "missing username");
        assert_eq!(ErrorKind::MissingAccessKey.to_string(), "missing accessKey");
        assert_eq!(
            ErrorKind::InvalidRegion("ap".to_string()).to_string(),
            "invalid region: ap"
        );
    }

    #[test]
    fn test_from_url_parse_error() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = url_err.into();
        assert!(matches!(err.kind, ErrorKind::Config(_)));
        assert!(err.source.is_some());
    }
}
