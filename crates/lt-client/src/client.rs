//! Core HTTP transport: one authenticated call per request, no retry.

use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestMethod;
use crate::response::RawResponse;

/// Header carrying the client identifier.
pub const CLIENT_HEADER: &str = "client";
/// Header carrying the client version.
pub const VERSION_HEADER: &str = "version";

/// A fully-built request, ready to send.
#[derive(Clone)]
pub struct OutboundRequest {
    /// HTTP method.
    pub method: RequestMethod,
    /// Absolute URL, query string included.
    pub url: url::Url,
    /// `Authorization` header value.
    pub authorization: String,
    /// Serialized JSON body.
    pub body: Option<String>,
}

impl std::fmt::Debug for OutboundRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutboundRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("authorization", &"[REDACTED]")
            .field("body", &self.body.as_ref().map(|b| b.len()))
            .finish()
    }
}

impl OutboundRequest {
    /// A GET request without body.
    pub fn get(url: url::Url, authorization: impl Into<String>) -> Self {
        Self {
            method: RequestMethod::Get,
            url,
            authorization: authorization.into(),
            body: None,
        }
    }
}

/// HTTP client for the LambdaTest API.
#[derive(Debug, Clone)]
pub struct LtHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl LtHttpClient {
    /// Create a new HTTP client.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and read the whole body.
    ///
    /// Every status is returned as a [`RawResponse`]; only network-level
    /// failures are errors.
    pub async fn send(&self, request: &OutboundRequest) -> Result<RawResponse> {
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), request.url.clone())
            .header(reqwest::header::AUTHORIZATION, request.authorization.as_str())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .header(CLIENT_HEADER, crate::CLIENT_NAME)
            .header(VERSION_HEADER, crate::CLIENT_VERSION);

        if let Some(ref body) = request.body {
            req = req.body(body.clone());
        }

        if self.config.enable_tracing {
            debug!(
                method = ?request.method,
                url = %request.url,
                "Sending request"
            );
        }

        let response = req.send().await?;

        if self.config.enable_tracing {
            let status = response.status().as_u16();
            let content_length = response.content_length();

            if status == 200 {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-200 response");
            }
        }

        RawResponse::read(response).await
    }
}
