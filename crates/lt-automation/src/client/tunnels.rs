use tracing::instrument;

use lambdatest_client::ApiResult;

use super::{resource_path, AutomationClient};

impl AutomationClient {
    /// List the account's tunnels.
    #[instrument(skip(self))]
    pub async fn fetch_tunnels(&self) -> ApiResult {
        self.get("/tunnels".to_string()).await
    }

    /// Stop and delete a tunnel.
    #[instrument(skip(self))]
    pub async fn delete_tunnel_by_id(&self, tunnel_id: &str) -> ApiResult {
        let path = resource_path("tunnels", tunnel_id, None, "tunnelId")?;
        self.delete(path).await
    }
}
