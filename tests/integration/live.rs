//! Smoke tests against the real LambdaTest API.

use lambdatest_api::{AutomationClient, ClientCredentials};

fn live_credentials() -> ClientCredentials {
    match ClientCredentials::from_env() {
        Ok(creds) => creds,
        Err(err) => panic!(
            "\n\nLive tests need a LambdaTest account: set LT_USERNAME and \
             LT_ACCESS_KEY (and optionally LT_REGION).\nError: {err}\n\n"
        ),
    }
}

#[tokio::test]
#[ignore]
async fn test_live_fetch_platforms() {
    let client = AutomationClient::new(&live_credentials()).expect("Failed to create client");
    let platforms = client
        .fetch_platforms()
        .await
        .expect("fetch_platforms should succeed");
    assert!(platforms.is_object());
}

#[tokio::test]
#[ignore]
async fn test_live_fetch_builds_and_tunnels() {
    let client = AutomationClient::new(&live_credentials()).expect("Failed to create client");

    let builds = client
        .fetch_builds(&serde_json::json!({"limit": 1}))
        .await
        .expect("fetch_builds should succeed");
    assert!(builds.get("data").is_some());

    client.fetch_tunnels().await.expect("fetch_tunnels should succeed");
    assert!(client.inner().base_url().is_some());
}
