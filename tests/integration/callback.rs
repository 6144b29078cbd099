//! Callback and awaitable forms observe identical outcomes.

use super::common::{mount_discovery, probed_automation};
use lambdatest_api::{ClientConfig, RequestSpec};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_callback_and_await_share_one_resolution() {
    let mock_server = MockServer::start().await;
    mount_discovery(&mock_server, "automation", &["v1"], "v1", 1).await;
    Mock::given(method("GET"))
        .and(path("/automation/api/v1/builds/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"build_id": 1}})))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = probed_automation(&mock_server, ClientConfig::default());

    let (tx, rx) = tokio::sync::oneshot::channel();
    client
        .inner()
        .dispatch_with_callback(RequestSpec::resource("builds", "1"), move |result| {
            let _ = tx.send(result);
        })
        .unwrap();

    let (tx2, rx2) = tokio::sync::oneshot::channel();
    client.with_callback(
        |c| async move { c.fetch_build_by_id("1").await },
        move |result| {
            let _ = tx2.send(result);
        },
    );

    let awaited = client.fetch_build_by_id("1").await.unwrap();
    assert_eq!(rx.await.unwrap().unwrap(), awaited);
    assert_eq!(rx2.await.unwrap().unwrap(), awaited);
}

#[tokio::test]
async fn test_callback_receives_classified_errors() {
    let mock_server = MockServer::start().await;
    mount_discovery(&mock_server, "automation", &["v1"], "v1", 1).await;
    Mock::given(method("GET"))
        .and(path("/automation/api/v1/sessions/S9/video"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not-json"))
        .mount(&mock_server)
        .await;

    let client = probed_automation(&mock_server, ClientConfig::default());
    let awaited = client.fetch_session_video("S9").await.unwrap_err();

    let (tx, rx) = tokio::sync::oneshot::channel();
    client.with_callback(
        |c| async move { c.fetch_session_video("S9").await },
        move |result| {
            let _ = tx.send(result);
        },
    );
    let called_back = rx.await.unwrap().unwrap_err();

    assert_eq!(called_back.to_string(), awaited.to_string());
}

#[tokio::test]
async fn test_callback_rejects_bad_spec_before_spawning() {
    let mock_server = MockServer::start().await;
    let client = probed_automation(&mock_server, ClientConfig::default());

    let err = client
        .inner()
        .dispatch_with_callback(RequestSpec::resource("", "1"), |_| {
            panic!("completion must not run")
        })
        .unwrap_err();
    assert!(err.to_string().contains("missing required parameters"));
}
