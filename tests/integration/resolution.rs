//! Base URL resolution through the public API.

use super::common::{credentials, mount_discovery, probed_automation, probed_automation_for};
use lambdatest_api::client::{ResolutionState, VersionStrategy};
use lambdatest_api::{ApiClient, ClientConfig, ClientCredentials, ErrorKind, Region};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_builtin_region_templates() {
    let cases = [
        (Region::Us, false, "https://api.lambdatest.com/automation/api/v1"),
        (Region::Eu, false, "https://eu-api.lambdatest.com/automation/api/v1"),
        (
            Region::Us,
            true,
            "https://mobile-api.lambdatest.com/mobile-automation/api/v1",
        ),
        (
            Region::Eu,
            true,
            "https://eu-mobile-api.lambdatest.com/mobile-automation/api/v1",
        ),
    ];

    for (region, is_app, expected) in cases {
        let profile = region.profile();
        let url = format!(
            "{}{}",
            profile.template(is_app),
            profile.pinned_version(is_app).unwrap()
        );
        assert_eq!(url, expected, "{region:?} app={is_app}");
    }
}

#[tokio::test]
async fn test_pinned_builtin_region_resolves_without_network() {
    let creds = ClientCredentials::new("user", "key")
        .with_region_str("eu")
        .unwrap()
        .for_app(true);
    let client = ApiClient::with_config(&creds, ClientConfig::builder().pinned_version().build())
        .unwrap();

    let base = client.resolve_base_url().await.unwrap();
    assert_eq!(
        base,
        "https://eu-mobile-api.lambdatest.com/mobile-automation/api/v1"
    );
}

#[test]
fn test_invalid_region_is_a_config_error() {
    let err = ClientCredentials::new("user", "key")
        .with_region_str("ap")
        .map_err(lambdatest_api::Error::from)
        .unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("invalid region: ap"));
}

#[tokio::test]
async fn test_probe_then_dispatch_uses_latest_version() {
    let mock_server = MockServer::start().await;
    mount_discovery(&mock_server, "automation", &["v1", "v2"], "v2", 1).await;
    Mock::given(method("GET"))
        .and(path("/automation/api/v2/builds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = probed_automation(&mock_server, ClientConfig::default());
    client.fetch_builds(&()).await.unwrap();
    client.fetch_builds(&()).await.unwrap();

    assert_eq!(
        client.inner().resolution_state(),
        ResolutionState::Resolved(format!("{}/automation/api/v2", mock_server.uri()))
    );
}

#[tokio::test]
async fn test_probe_uses_app_template_for_app_clients() {
    let mock_server = MockServer::start().await;
    mount_discovery(&mock_server, "mobile-automation", &["v1"], "v1", 1).await;
    Mock::given(method("GET"))
        .and(path("/mobile-automation/api/v1/sessions/S1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = probed_automation_for(
        &mock_server,
        credentials().for_app(true),
        ClientConfig::default(),
    );
    client.fetch_session_by_id("S1").await.unwrap();
}

#[tokio::test]
async fn test_requested_version_is_used_when_supported() {
    let mock_server = MockServer::start().await;
    mount_discovery(&mock_server, "automation", &["v1", "v2"], "v2", 1).await;
    Mock::given(method("GET"))
        .and(path("/automation/api/v1/tunnels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder().request_version("v1").build();
    let client = probed_automation(&mock_server, config);
    client.fetch_tunnels().await.unwrap();
}

#[tokio::test]
async fn test_unsupported_requested_version_fails_without_retry() {
    let mock_server = MockServer::start().await;
    mount_discovery(&mock_server, "automation", &["v1", "v2"], "v2", 1).await;

    let config = ClientConfig::builder()
        .with_version_strategy(VersionStrategy::probed_for("v3"))
        .build();
    let client = probed_automation(&mock_server, config);

    let err = client.fetch_platforms().await.unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::VersionResolution { attempts: 1, .. }
    ));
    assert_eq!(client.inner().resolution_state(), ResolutionState::Unresolved);
}

#[tokio::test]
async fn test_exhausted_budget_then_recovery() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/automation/api/versions"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(3)
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder().with_discovery_attempts(3).build();
    let client = probed_automation(&mock_server, config);

    let err = client.fetch_platforms().await.unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::VersionResolution { attempts: 3, .. }
    ));

    // The next request bootstraps from scratch
    mount_discovery(&mock_server, "automation", &["v1"], "v1", 1).await;
    Mock::given(method("GET"))
        .and(path("/automation/api/v1/platforms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"platforms": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    client.fetch_platforms().await.unwrap();
}
