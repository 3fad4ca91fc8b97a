//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use crate::types::Method;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.connect_timeout, Duration::from_secs(10));
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("activecampaign-api/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.connect_timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_options_builder() {
    let options = RequestOptions::new(Method::POST, "https://example.com/api/3/tags")
        .header("Api-Token", "abc123")
        .query("limit", 10)
        .json(json!({"tag": {"tag": "vip"}}));

    assert_eq!(options.method, Method::POST);
    assert_eq!(options.headers.get("Api-Token"), Some(&"abc123".to_string()));
    assert_eq!(options.query.get("limit"), Some(&json!(10)));
    assert!(options.body.is_some());
}

#[tokio::test]
async fn test_send_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contacts": [{"id": "1", "email": "alice@example.com"}]
        })))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let body = client
        .send(RequestOptions::new(
            Method::GET,
            format!("{}/api/3/contacts", mock_server.uri()),
        ))
        .await
        .unwrap();

    assert_eq!(body["contacts"][0]["email"], "alice@example.com");
}

#[tokio::test]
async fn test_send_headers_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3/deals"))
        .and(header("Api-Token", "secret"))
        .and(header("X-Default", "yes"))
        .and(query_param("limit", "100"))
        .and(query_param("filters[stage]", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deals": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client =
        HttpClient::with_config(HttpClientConfig::builder().header("X-Default", "yes").build())
            .unwrap();
    let options = RequestOptions::new(Method::GET, format!("{}/api/3/deals", mock_server.uri()))
        .header("Api-Token", "secret")
        .query("limit", 100)
        .query("filters", json!({"stage": 4}));

    let body = client.send(options).await.unwrap();
    assert_eq!(body, json!({"deals": []}));
}

#[tokio::test]
async fn test_send_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3/tags"))
        .and(body_json(json!({"tag": {"tag": "vip"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"tag": {"id": "9"}})))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let options = RequestOptions::new(Method::POST, format!("{}/api/3/tags", mock_server.uri()))
        .json(json!({"tag": {"tag": "vip"}}));

    let body = client.send(options).await.unwrap();
    assert_eq!(body["tag"]["id"], "9");
}

#[tokio::test]
async fn test_send_without_body_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/3/tags/9"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let body = client
        .send(RequestOptions::new(
            Method::DELETE,
            format!("{}/api/3/tags/9", mock_server.uri()),
        ))
        .await
        .unwrap();

    assert_eq!(body, serde_json::Value::Null);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_send_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3/secret"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .send(RequestOptions::new(
            Method::GET,
            format!("{}/api/3/secret", mock_server.uri()),
        ))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "Forbidden");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_send_invalid_url() {
    let client = HttpClient::new().unwrap();
    let err = client
        .send(RequestOptions::new(Method::GET, "not a url"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidUrl(_)));
}
