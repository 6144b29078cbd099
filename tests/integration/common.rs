use lambdatest_api::{ApiClient, AutomationClient, ClientConfig, ClientCredentials, RegionProfile};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const AUTH_HEADER: &str = "Basic dXNlcjprZXk=";

pub fn credentials() -> ClientCredentials {
    ClientCredentials::new("user", "key")
}

/// Unpinned profile: standard template `{server}/automation/api/`, app
/// template `{server}/mobile-automation/api/`. Clients built on it probe.
pub fn mock_profile(server: &MockServer) -> RegionProfile {
    RegionProfile::custom(format!("{}/automation/api/", server.uri()))
        .unwrap()
        .with_app_base_url(format!("{}/mobile-automation/api/", server.uri()))
        .unwrap()
}

pub fn probed_automation(server: &MockServer, config: ClientConfig) -> AutomationClient {
    probed_automation_for(server, credentials(), config)
}

pub fn probed_automation_for(
    server: &MockServer,
    creds: ClientCredentials,
    config: ClientConfig,
) -> AutomationClient {
    let api = ApiClient::with_profile(&creds, mock_profile(server), config).unwrap();
    AutomationClient::from_client(api)
}

/// Mount a discovery endpoint answering with `versions` and `latest`.
pub async fn mount_discovery(
    server: &MockServer,
    prefix: &str,
    versions: &[&str],
    latest: &str,
    expected_calls: u64,
) {
    Mock::given(method("GET"))
        .and(path(format!("/{}/api/versions", prefix)))
        .and(header("Authorization", AUTH_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "supportedVersions": versions,
            "latestVersion": latest,
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}
