//! Error types for lt-client.

/// Result type alias for lt-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for lt-client operations.
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

    /// Shorthand for an [`ErrorKind::InvalidRequest`] error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRequest(message.into()))
    }

    /// Returns true if version discovery should try again after this error.
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    /// Returns true if this is a network-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    /// Returns true if the service answered with a non-200 status.
    pub fn is_http(&self) -> bool {
        matches!(self.kind, ErrorKind::Http { .. })
    }

    /// Returns true if this error was raised while constructing the client.
    pub fn is_config(&self) -> bool {
        matches!(self.kind, ErrorKind::Config(_))
    }

    /// The HTTP status, if the service answered with a non-200 status.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Missing or invalid credentials, region or client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The base URL / API version could not be resolved.
    #[error("Version resolution failed after {attempts} attempt(s): {reason}")]
    VersionResolution { reason: String, attempts: u32 },

    /// Network-level failure (connection refused, DNS, timeout, truncated body).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A 200 response whose body is not valid JSON.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Any non-200 response.
    #[error("HTTP error: {status} {body}")]
    Http { status: u16, body: String },

    /// Malformed request (no resolvable URL, missing identifier).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Request body could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ErrorKind {
    /// Returns true if this error kind is retried by version discovery.
    ///
    /// An unsupported requested version is terminal and never retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::Transport(_) | ErrorKind::Parse(_) | ErrorKind::Http { .. }
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else {
            err.to_string()
        };
        Error::with_source(ErrorKind::Transport(message), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidRequest(format!("Invalid URL: {}", err)), err)
    }
}

impl From<lambdatest_auth::Error> for Error {
    fn from(err: lambdatest_auth::Error) -> Self {
        Error::with_source(ErrorKind::Config(err.kind.to_string()), err)
    }
}
