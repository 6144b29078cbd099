//! HTTP response classification.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use crate::error::{Error, ErrorKind, Result};

/// Outcome of a dispatched request: the parsed body, or the failure cause.
pub type ApiResult<T = Value> = Result<T>;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl RawResponse {
    /// Create a response from its parts.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Read status and body from a reqwest response.
    ///
    /// A body that cannot be read counts as a transport failure.
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(Self { status, body })
    }

    /// Returns true for exactly HTTP 200.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Classify into success or failure.
    ///
    /// - 200 with a JSON body: the parsed body
    /// - 200 with anything else: [`ErrorKind::Parse`]
    /// - any other status: [`ErrorKind::Http`] with the raw body
    pub fn into_api_result(self) -> ApiResult {
        self.into_json()
    }

    /// Classify and deserialize the body into `T`.
    pub fn into_json<T: DeserializeOwned>(self) -> ApiResult<T> {
        if !self.is_ok() {
            return Err(Error::new(ErrorKind::Http {
                status: self.status,
                body: self.body,
            }));
        }

        serde_json::from_str(&self.body).map_err(|e| {
            error!(error = %e, body_len = self.body.len(), "Error while parsing response body as JSON");
            Error::with_source(ErrorKind::Parse(e.to_string()), e)
        })
    }
}
