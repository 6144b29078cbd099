use tracing::instrument;

use lambdatest_client::ApiResult;

use super::AutomationClient;

impl AutomationClient {
    /// Browsers and operating systems available for automation.
    #[instrument(skip(self))]
    pub async fn fetch_platforms(&self) -> ApiResult {
        self.get("/platforms".to_string()).await
    }
}
