//! Resource operations end to end against a mock LambdaTest API.

use super::common::{mount_discovery, probed_automation, AUTH_HEADER};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use lambdatest_api::automation::{BuildUpdate, SessionQuery};
use lambdatest_api::{ClientConfig, ErrorKind, RequestMethod, RequestSpec};
use serde::Serialize;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_auth_header_is_basic_of_username_and_key() {
    let encoded = AUTH_HEADER.strip_prefix("Basic ").unwrap();
    let decoded = STANDARD.decode(encoded).unwrap();
    assert_eq!(decoded, b"user:key");
}

#[tokio::test]
async fn test_session_lifecycle() {
    let mock_server = MockServer::start().await;
    mount_discovery(&mock_server, "automation", &["v1", "v2"], "v2", 1).await;

    Mock::given(method("GET"))
        .and(path("/automation/api/v2/sessions"))
        .and(query_param("build_id", "12"))
        .and(header("Authorization", AUTH_HEADER))
        .and(header("client", "rust-rest-client"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": [{"session_id": "S1"}, {"session_id": "S2"}]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/automation/api/v2/sessions/S1/log/network"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/automation/api/v2/sessions/S2"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Session not found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = probed_automation(&mock_server, ClientConfig::default());

    let sessions = client
        .fetch_sessions(&SessionQuery::new().build_id(12))
        .await
        .unwrap();
    let ids: Vec<&str> = sessions["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["session_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["S1", "S2"]);

    client.fetch_session_network_logs("S1").await.unwrap();

    let err = client.delete_session_by_id("S2").await.unwrap_err();
    match err.kind {
        ErrorKind::Http { status, ref body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Session not found");
        }
        ref other => panic!("unexpected kind: {other:?}"),
    }
}

#[tokio::test]
async fn test_update_build_with_custom_body_type() {
    #[derive(Serialize)]
    struct Rename<'a> {
        name: &'a str,
    }

    let mock_server = MockServer::start().await;
    mount_discovery(&mock_server, "automation", &["v1"], "v1", 1).await;
    Mock::given(method("PATCH"))
        .and(path("/automation/api/v1/builds/7"))
        .and(body_json(json!({"name": "release-42"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = probed_automation(&mock_server, ClientConfig::default());
    client
        .update_build_by_id("7", &Rename { name: "release-42" })
        .await
        .unwrap();
    client
        .update_build_by_id("7", &BuildUpdate::rename("release-42"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_generic_fetch_by_url_with_query_and_body() {
    let mock_server = MockServer::start().await;
    mount_discovery(&mock_server, "automation", &["v1"], "v1", 1).await;
    Mock::given(method("PUT"))
        .and(path("/automation/api/v1/user/settings"))
        .and(query_param("dry_run", "true"))
        .and(body_json(json!({"theme": "dark"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = probed_automation(&mock_server, ClientConfig::default());
    let body = client
        .fetch(
            RequestSpec::url("/user/settings")
                .method(RequestMethod::Put)
                .query("dry_run", true)
                .json_value(json!({"theme": "dark"})),
        )
        .await
        .unwrap();
    assert_eq!(body, json!({"ok": true}));
}

#[tokio::test]
async fn test_success_requires_exactly_200() {
    let mock_server = MockServer::start().await;
    mount_discovery(&mock_server, "automation", &["v1"], "v1", 1).await;
    Mock::given(method("DELETE"))
        .and(path("/automation/api/v1/tunnels/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = probed_automation(&mock_server, ClientConfig::default());
    let err = client.delete_tunnel_by_id("3").await.unwrap_err();
    assert_eq!(err.status(), Some(204));
}
