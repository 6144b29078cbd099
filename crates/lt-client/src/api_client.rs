//! Request dispatcher.
//!
//! `ApiClient` owns the client state for one credential set: the derived
//! auth header, the region profile, and the lazily resolved base URL.
//!
//! ## Security
//!
//! - The auth header is redacted in Debug output
//! - Request bodies and headers are skipped in tracing spans

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

use lambdatest_auth::{ClientCredentials, RegionProfile};

use crate::callback::spawn_with_callback;
use crate::client::{LtHttpClient, OutboundRequest};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::logging;
use crate::request::RequestSpec;
use crate::response::ApiResult;
use crate::version::VersionResolver;

/// Lifecycle of the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionState {
    /// No resolution has succeeded yet.
    Unresolved,
    /// The base URL every request is sent to.
    Resolved(String),
}

struct ClientState {
    authorization: String,
    profile: RegionProfile,
    is_app: bool,
    resolver: VersionResolver,
    // Written once; concurrent first requests share one resolution.
    base_url: OnceCell<String>,
}

/// LambdaTest API client.
///
/// Clones share state (and therefore the resolved base URL). Separately
/// constructed clients never do.
///
/// # Example
///
/// ```rust,ignore
/// use lambdatest_auth::ClientCredentials;
/// use lambdatest_client::{ApiClient, RequestSpec};
///
/// let client = ApiClient::new(&ClientCredentials::new("user", "key"))?;
///
/// // Awaitable
/// let builds = client.dispatch(RequestSpec::url("/builds")).await?;
///
/// // Callback
/// client.dispatch_with_callback(RequestSpec::resource("builds", "42"), |result| {
///     println!("{result:?}");
/// })?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    http: LtHttpClient,
    state: Arc<ClientState>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("authorization", &"[REDACTED]")
            .field("profile", &self.state.profile)
            .field("is_app", &self.state.is_app)
            .field("base_url", &self.state.base_url.get())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for the credentials' region with default configuration.
    pub fn new(credentials: &ClientCredentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client for the credentials' region with custom configuration.
    pub fn with_config(credentials: &ClientCredentials, config: ClientConfig) -> Result<Self> {
        Self::with_profile(credentials, credentials.profile(), config)
    }

    /// Create a client against an explicit region profile.
    ///
    /// Fails with a configuration error when the username or access key is
    /// missing, or when the profile cannot serve the configured version
    /// strategy.
    pub fn with_profile(
        credentials: &ClientCredentials,
        profile: RegionProfile,
        config: ClientConfig,
    ) -> Result<Self> {
        credentials.validate()?;

        logging::init(credentials.log_file());
        info!(
            username = credentials.username(),
            region = %credentials.region(),
            is_app = credentials.is_app(),
            "Imported ApiClient and user credentials"
        );

        let is_app = credentials.is_app();
        let resolver = VersionResolver::new(&profile, is_app, &config)?;
        let http = LtHttpClient::new(config)?;

        Ok(Self {
            http,
            state: Arc::new(ClientState {
                authorization: credentials.auth_header(),
                profile,
                is_app,
                resolver,
                base_url: OnceCell::new(),
            }),
        })
    }

    /// The `Authorization` header value sent with every request.
    pub fn auth_header(&self) -> &str {
        &self.state.authorization
    }

    /// The region profile in use.
    pub fn profile(&self) -> &RegionProfile {
        &self.state.profile
    }

    /// Whether the app template is used.
    pub fn is_app(&self) -> bool {
        self.state.is_app
    }

    /// The version resolver.
    pub fn resolver(&self) -> &VersionResolver {
        &self.state.resolver
    }

    /// The resolved base URL, if resolution has happened.
    pub fn base_url(&self) -> Option<&str> {
        self.state.base_url.get().map(String::as_str)
    }

    /// Whether the base URL has been resolved.
    pub fn resolution_state(&self) -> ResolutionState {
        match self.state.base_url.get() {
            Some(url) => ResolutionState::Resolved(url.clone()),
            None => ResolutionState::Unresolved,
        }
    }

    /// Resolve the base URL if needed and return it.
    ///
    /// Concurrent callers wait for a single resolution. A failed resolution
    /// leaves the client unresolved, so the next call starts over.
    pub async fn resolve_base_url(&self) -> Result<&str> {
        let state = &self.state;
        let url = state
            .base_url
            .get_or_try_init(|| state.resolver.resolve(&self.http, &state.authorization))
            .await?;
        Ok(url.as_str())
    }

    /// Build the outbound request for a spec, resolving the base URL first.
    async fn prepare(&self, spec: &RequestSpec) -> Result<OutboundRequest> {
        let path = spec.path()?;
        let body = spec.body().map(|b| b.to_json_string()).transpose()?;

        let base_url = self.resolve_base_url().await?;
        let mut url = url::Url::parse(&format!("{}{}", base_url, path))?;
        if !spec.query_pairs().is_empty() {
            url.query_pairs_mut().extend_pairs(spec.query_pairs());
        }

        Ok(OutboundRequest {
            method: spec.http_method(),
            url,
            authorization: self.state.authorization.clone(),
            body,
        })
    }

    /// Send a request and classify the outcome.
    ///
    /// A malformed request spec fails before the base URL is resolved or anything is
    /// sent. Requests are never retried.
    #[instrument(skip(self, spec), fields(method = ?spec.http_method(), target = ?spec.target()))]
    pub async fn dispatch(&self, spec: RequestSpec) -> ApiResult {
        self.dispatch_json(spec).await
    }

    /// Like [`dispatch`](Self::dispatch), deserializing the body into `T`.
    pub async fn dispatch_json<T: DeserializeOwned>(&self, spec: RequestSpec) -> ApiResult<T> {
        let request = self.prepare(&spec).await?;

        info!(
            method = ?request.method,
            url = %request.url,
            query = ?request.url.query(),
            has_body = request.body.is_some(),
            "Api request options"
        );

        let response = match self.http.send(&request).await {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, "Error while calling the API");
                return Err(err);
            }
        };

        let status = response.status;
        debug!(status, body = %response.body, "Api response body");
        match response.into_json::<T>() {
            Ok(body) => {
                info!(status, "Api response json");
                Ok(body)
            }
            Err(err) => {
                error!(status, error = %err, "Api request failed");
                Err(err)
            }
        }
    }

    /// Callback form of [`dispatch`](Self::dispatch).
    ///
    /// A malformed request spec is rejected here, before anything is spawned.
    /// Otherwise `completion` runs exactly once with the same result the
    /// awaitable form would produce.
    pub fn dispatch_with_callback<C>(&self, spec: RequestSpec, completion: C) -> Result<JoinHandle<()>>
    where
        C: FnOnce(ApiResult) + Send + 'static,
    {
        spec.path()?;
        let client = self.clone();
        Ok(spawn_with_callback(
            async move { client.dispatch(spec).await },
            completion,
        ))
    }
}
