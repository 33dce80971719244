//! Alert notification channel endpoint tests.

use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use grafana_client::endpoints;

#[tokio::test]
async fn test_create_dingtalk_channel_posts_exact_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/alert-notifications"))
        .and(header("Accept", "application/json"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_json(json!({
            "name": "c1-dingtalk",
            "type": "dingding",
            "isDefault": true,
            "settings": {
                "addresses": "https://x"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "c1-dingtalk"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::create_dingtalk_channel(
        &client,
        &mock_server.uri(),
        "Bearer test-key",
        "c1",
        "https://x",
    )
    .await;

    let body = result.unwrap();
    assert!(body.contains("c1-dingtalk"));
}

#[tokio::test]
async fn test_create_dingtalk_channel_empty_webhook_still_posts() {
    // The webhook URL defaults to empty; the request is still issued and the
    // remote response decides the outcome.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/alert-notifications"))
        .and(body_json(json!({
            "name": "c1-dingtalk",
            "type": "dingding",
            "isDefault": true,
            "settings": {
                "addresses": ""
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result =
        endpoints::create_dingtalk_channel(&client, &mock_server.uri(), "", "c1", "").await;

    assert!(result.is_ok());
}
