// Integration tests for `ApiClient` using wiremock.
#![allow(clippy::unwrap_used)]

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use natsdash_api::{
    ApiClient, ApiResult, FALLBACK_ERROR, HealthStatus, Method, NatsStats, PublishAck,
    RequestOptions, TransportConfig,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::from_url(&server.uri()).unwrap();
    (server, client)
}

/// A base URL nothing is listening on.
fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

// ── Request client ──────────────────────────────────────────────────

#[tokio::test]
async fn test_success_returns_decoded_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.request("/api/ping", RequestOptions::get()).await;

    assert_eq!(result, ApiResult::Success(json!({"ok": true})));
    assert_eq!(result.error(), None);
}

#[tokio::test]
async fn test_error_status_uses_message_field() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "server error"})))
        .mount(&server)
        .await;

    let result = client.request("/api/ping", RequestOptions::get()).await;

    assert!(!result.is_success());
    assert_eq!(result.data(), None);
    assert_eq!(result.error(), Some("server error"));
}

#[tokio::test]
async fn test_error_status_without_message_falls_back() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/things/7"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"code": 404})))
        .mount(&server)
        .await;

    let result = client
        .request("/api/things/7", RequestOptions::new(Method::Delete))
        .await;

    assert_eq!(result, ApiResult::Failure(FALLBACK_ERROR.into()));
}

#[tokio::test]
async fn test_error_status_with_null_body_falls_back() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/nats/stats"))
        .respond_with(ResponseTemplate::new(500).set_body_string("null"))
        .mount(&server)
        .await;

    let result = client.nats_stats().await;

    assert_eq!(result, ApiResult::Failure(FALLBACK_ERROR.into()));
}

#[tokio::test]
async fn test_non_json_body_is_a_failure() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let result = client.request("/api/ping", RequestOptions::get()).await;

    assert!(!result.is_success());
    assert!(!result.error().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_success_body_is_a_failure() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/settings"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let result = client
        .request(
            "/api/settings",
            RequestOptions::new(Method::Put).with_body(json!({"theme": "dark"})),
        )
        .await;

    assert!(!result.is_success());
    assert!(!result.error().unwrap().is_empty());
}

#[tokio::test]
async fn test_connection_refused_is_a_failure() {
    let client = ApiClient::from_url(&dead_url()).unwrap();

    let result = client.request("/api/ping", RequestOptions::get()).await;

    assert!(!result.is_success());
    assert_eq!(result.data(), None);
    assert!(!result.error().unwrap().is_empty());
}

#[tokio::test]
async fn test_transport_timeout_is_a_failure() {
    let server = MockServer::start().await;
    let transport = TransportConfig::default().with_timeout(Duration::from_millis(50));
    let client = ApiClient::new(server.uri().parse().unwrap(), &transport).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": true}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let result = client.request("/api/slow", RequestOptions::get()).await;

    assert!(!result.is_success());
}

#[tokio::test]
async fn test_json_content_type_without_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.request("/api/ping", RequestOptions::get()).await;
    assert!(result.is_success());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_null_body_sends_no_payload() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let opts = RequestOptions::new(Method::Post).with_body(serde_json::Value::Null);
    client.request("/api/ping", opts).await;

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"n": 1})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/b"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"message": "busy"})))
        .mount(&server)
        .await;

    let (a, b) = tokio::join!(
        client.request("/api/a", RequestOptions::get()),
        client.request("/api/b", RequestOptions::get()),
    );

    assert_eq!(a, ApiResult::Success(json!({"n": 1})));
    assert_eq!(b, ApiResult::Failure("busy".into()));
}

// ── Event publisher ─────────────────────────────────────────────────

#[tokio::test]
async fn test_publish_event_posts_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/events"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"type": "click", "data": {"x": 1}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Event published successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.publish_event("click", &json!({"x": 1})).await;

    let ack: PublishAck = result.decode().unwrap();
    assert!(ack.success);
    assert_eq!(ack.message.as_deref(), Some("Event published successfully"));
}

#[tokio::test]
async fn test_publish_event_passes_failures_through() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Failed to publish event"
        })))
        .mount(&server)
        .await;

    let result = client.publish_event("click", &json!({"x": 1})).await;

    assert_eq!(result.error(), Some("Failed to publish event"));
}

// ── Stats fetcher ───────────────────────────────────────────────────

#[tokio::test]
async fn test_nats_stats_forwards_body_verbatim() {
    let (server, client) = setup().await;

    let body = json!({
        "connections": 4,
        "subscriptions": 9,
        "messages": { "in": 120, "out": 118 },
        "bytes": { "in": 40960, "out": 38912 },
        "uptime": "3h12m5.5s",
        "server_id": "NDX3"
    });

    Mock::given(method("GET"))
        .and(path("/api/nats/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.nats_stats().await;
    assert_eq!(result.data(), Some(&body));

    let stats: NatsStats = result.decode().unwrap();
    assert_eq!(stats.connections, 4);
    assert_eq!(stats.messages.outbound, 118);
    assert_eq!(stats.uptime, "3h12m5.5s");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_nats_stats_does_not_validate_shape() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/nats/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"connections": "many"})))
        .mount(&server)
        .await;

    let result = client.nats_stats().await;

    assert_eq!(result.data(), Some(&json!({"connections": "many"})));
    assert!(result.decode::<NatsStats>().is_err());
}

// ── Health ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "database": "connected",
            "nats": "running",
            "timestamp": "2024-05-01T09:30:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let health: HealthStatus = client.health().await.decode().unwrap();

    assert!(health.is_healthy());
    assert_eq!(health.nats.as_deref(), Some("running"));
}
