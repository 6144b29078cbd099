use serde::Serialize;
use tracing::instrument;

use lambdatest_client::ApiResult;

use super::{resource_path, AutomationClient};
use crate::types::SessionLog;

impl AutomationClient {
    /// List sessions, filtered by `query` (e.g. [`SessionQuery`](crate::SessionQuery)).
    #[instrument(skip(self, query))]
    pub async fn fetch_sessions<Q: Serialize + ?Sized>(&self, query: &Q) -> ApiResult {
        self.get_with_query("/sessions", query).await
    }

    /// Get a single session.
    #[instrument(skip(self))]
    pub async fn fetch_session_by_id(&self, session_id: &str) -> ApiResult {
        let path = resource_path("sessions", session_id, None, "sessionId")?;
        self.get(path).await
    }

    /// Delete a session.
    #[instrument(skip(self))]
    pub async fn delete_session_by_id(&self, session_id: &str) -> ApiResult {
        let path = resource_path("sessions", session_id, None, "sessionId")?;
        self.delete(path).await
    }

    /// Update a session, e.g. with [`SessionUpdate`](crate::SessionUpdate).
    #[instrument(skip(self, body))]
    pub async fn update_session_by_id<B: Serialize + ?Sized>(
        &self,
        session_id: &str,
        body: &B,
    ) -> ApiResult {
        let path = resource_path("sessions", session_id, None, "sessionId")?;
        self.patch(path, body, "requestBody").await
    }

    // =========================================================================
    // Session artifacts
    // =========================================================================

    /// Screenshots captured during a session.
    #[instrument(skip(self))]
    pub async fn fetch_session_screenshot(&self, session_id: &str) -> ApiResult {
        self.session_artifact(session_id, "screenshots").await
    }

    /// Video recording of a session.
    #[instrument(skip(self))]
    pub async fn fetch_session_video(&self, session_id: &str) -> ApiResult {
        self.session_artifact(session_id, "video").await
    }

    #[instrument(skip(self))]
    pub async fn fetch_session_command_logs(&self, session_id: &str) -> ApiResult {
        self.fetch_session_logs(session_id, SessionLog::Command).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_session_selenium_logs(&self, session_id: &str) -> ApiResult {
        self.fetch_session_logs(session_id, SessionLog::Selenium).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_session_network_logs(&self, session_id: &str) -> ApiResult {
        self.fetch_session_logs(session_id, SessionLog::Network).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_session_console_logs(&self, session_id: &str) -> ApiResult {
        self.fetch_session_logs(session_id, SessionLog::Console).await
    }

    /// Any of the per-session log streams.
    pub async fn fetch_session_logs(&self, session_id: &str, log: SessionLog) -> ApiResult {
        self.session_artifact(session_id, log.path()).await
    }

    async fn session_artifact(&self, session_id: &str, artifact: &str) -> ApiResult {
        let path = resource_path("sessions", session_id, Some(artifact), "sessionId")?;
        self.get(path).await
    }
}
