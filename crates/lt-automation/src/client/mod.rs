//! LambdaTest automation API client.
//!
//! This client wraps `ApiClient` from `lambdatest-client` and provides one
//! method per automation resource operation.

use std::future::Future;

use serde::Serialize;
use serde_json::Value;
use tokio::task::JoinHandle;

use lambdatest_auth::ClientCredentials;
use lambdatest_client::security::url as url_security;
use lambdatest_client::{
    spawn_with_callback, ApiClient, ApiResult, ClientConfig, Error, RequestMethod, RequestSpec,
    Result,
};

mod builds;
mod platforms;
mod sessions;
mod tunnels;

/// LambdaTest automation API client.
///
/// Provides methods for:
/// - Builds (list, fetch, update, delete)
/// - Sessions (list, fetch, update, delete)
/// - Session artifacts (screenshots, video, command/selenium/network/console logs)
/// - Tunnels (list, delete)
/// - Platforms
///
/// Clones share the underlying [`ApiClient`] state.
///
/// # Example
///
/// ```rust,ignore
/// use lambdatest_automation::{AutomationClient, BuildQuery, SessionUpdate};
///
/// let client = AutomationClient::from_env()?;
///
/// let builds = client.fetch_builds(&BuildQuery::new().limit(10)).await?;
/// let session = client.fetch_session_by_id("SESSION_ID").await?;
/// client
///     .update_session_by_id("SESSION_ID", &SessionUpdate::default().with_status("passed"))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct AutomationClient {
    client: ApiClient,
}

impl AutomationClient {
    /// Create a new automation client for the given credentials.
    pub fn new(credentials: &ClientCredentials) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(credentials)?,
        })
    }

    /// Create a new automation client with custom configuration.
    pub fn with_config(credentials: &ClientCredentials, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: ApiClient::with_config(credentials, config)?,
        })
    }

    /// Create a client from `LT_USERNAME`, `LT_ACCESS_KEY` and friends.
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientCredentials::from_env()?)
    }

    /// Create an automation client from an existing ApiClient.
    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// Get the underlying ApiClient.
    pub fn inner(&self) -> &ApiClient {
        &self.client
    }

    /// Send an arbitrary request: a URL, or a resource path and id.
    pub async fn fetch(&self, spec: RequestSpec) -> ApiResult {
        self.client.dispatch(spec).await
    }

    /// Run `op` against an owned clone of this client and deliver its result
    /// to `completion`.
    ///
    /// ```rust,ignore
    /// client.with_callback(
    ///     |c| async move { c.fetch_build_by_id("42").await },
    ///     |result| println!("{result:?}"),
    /// );
    /// ```
    pub fn with_callback<Op, Fut, T, C>(&self, op: Op, completion: C) -> JoinHandle<()>
    where
        Op: FnOnce(AutomationClient) -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
        C: FnOnce(Result<T>) + Send + 'static,
    {
        spawn_with_callback(op(self.clone()), completion)
    }

    // =========================================================================
    // Request helpers
    // =========================================================================

    async fn get(&self, path: String) -> ApiResult {
        self.client.dispatch(RequestSpec::url(path)).await
    }

    async fn get_with_query<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> ApiResult {
        let spec = RequestSpec::url(path).query_params(query)?;
        self.client.dispatch(spec).await
    }

    async fn delete(&self, path: String) -> ApiResult {
        self.client
            .dispatch(RequestSpec::url(path).method(RequestMethod::Delete))
            .await
    }

    async fn patch<B: Serialize + ?Sized>(&self, path: String, body: &B, name: &str) -> ApiResult {
        let body = required_body(body, name)?;
        self.client
            .dispatch(
                RequestSpec::url(path)
                    .method(RequestMethod::Patch)
                    .json_value(body),
            )
            .await
    }
}

/// `/{collection}/{id}[/{suffix}]`, or `InvalidRequest` naming the missing id.
fn resource_path(collection: &str, id: &str, suffix: Option<&str>, name: &str) -> Result<String> {
    url_security::resource_path(collection, id, suffix)
        .ok_or_else(|| Error::invalid_request(format!("{} is required", name)))
}

/// Serialize an update body, rejecting `null` and `{}`.
fn required_body<B: Serialize + ?Sized>(body: &B, name: &str) -> Result<Value> {
    let value = serde_json::to_value(body)?;
    match &value {
        Value::Null => Err(Error::invalid_request(format!("{} is required", name))),
        Value::Object(map) if map.is_empty() => {
            Err(Error::invalid_request(format!("{} is required", name)))
        }
        _ => Ok(value),
    }
}
