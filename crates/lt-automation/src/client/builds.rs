use serde::Serialize;
use tracing::instrument;

use lambdatest_client::ApiResult;

use super::{resource_path, AutomationClient};

impl AutomationClient {
    /// List builds, filtered by `query` (any flat serializable mapping,
    /// e.g. [`BuildQuery`](crate::BuildQuery), or `()` for none).
    #[instrument(skip(self, query))]
    pub async fn fetch_builds<Q: Serialize + ?Sized>(&self, query: &Q) -> ApiResult {
        self.get_with_query("/builds", query).await
    }

    /// Get a single build.
    #[instrument(skip(self))]
    pub async fn fetch_build_by_id(&self, build_id: &str) -> ApiResult {
        let path = resource_path("builds", build_id, None, "buildId")?;
        self.get(path).await
    }

    /// Delete a build.
    #[instrument(skip(self))]
    pub async fn delete_build_by_id(&self, build_id: &str) -> ApiResult {
        let path = resource_path("builds", build_id, None, "buildId")?;
        self.delete(path).await
    }

    /// Update a build, e.g. with [`BuildUpdate`](crate::BuildUpdate).
    #[instrument(skip(self, body))]
    pub async fn update_build_by_id<B: Serialize + ?Sized>(
        &self,
        build_id: &str,
        body: &B,
    ) -> ApiResult {
        let path = resource_path("builds", build_id, None, "buildId")?;
        self.patch(path, body, "requestBody").await
    }
}
