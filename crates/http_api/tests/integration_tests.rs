//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::future::IntoFuture;

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use http_api::{routes::create_router, state::AppState};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::json;

fn create_test_server() -> TestServer {
    // A per-test recorder; the global recorder is only installed by main.
    let recorder = PrometheusBuilder::new().build_recorder();
    let state = AppState {
        metrics: recorder.handle(),
    };
    let router = create_router(state);
    TestServer::new(router).expect("Failed to create test server")
}

fn parse_timestamp(body: &serde_json::Value) -> DateTime<Utc> {
    let raw = body["timestamp"].as_str().expect("timestamp missing");
    DateTime::parse_from_rfc3339(raw)
        .expect("timestamp is not RFC3339")
        .with_timezone(&Utc)
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn health_endpoint_returns_fixed_payload() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "status": "UP",
        "service": "inventory-service"
    }));
}

#[tokio::test]
async fn health_endpoint_is_stable_across_requests() {
    let server = create_test_server();

    for _ in 0..3 {
        let response = server.get("/health").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "UP");
    }
}

// ============ Items Endpoint Tests ============

#[tokio::test]
async fn items_endpoint_returns_fixed_inventory() {
    let server = create_test_server();

    let before = Utc::now();
    let response = server.get("/items").await;
    let after = Utc::now();

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["items"],
        json!(["Server-Rack", "Kafka-Broker-X1", "Postgres-Disk-SSD"])
    );

    let timestamp = parse_timestamp(&body);
    assert!(timestamp >= before);
    assert!(timestamp <= after);
}

#[tokio::test]
async fn items_endpoint_accepts_inbound_traceparent() {
    let server = create_test_server();

    let response = server
        .get("/items")
        .add_header(
            HeaderName::from_static("traceparent"),
            HeaderValue::from_static("00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01"),
        )
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["items"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn concurrent_items_requests_get_independent_responses() {
    let server = create_test_server();

    let before = Utc::now();
    let responses =
        futures::future::join_all((0..50).map(|_| server.get("/items").into_future())).await;
    let after = Utc::now();

    for response in responses {
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["items"].as_array().map(Vec::len), Some(3));

        let timestamp = parse_timestamp(&body);
        assert!(timestamp >= before);
        assert!(timestamp <= after);
    }
}

// ============ Metrics Endpoint Tests ============

#[tokio::test]
async fn metrics_endpoint_serves_exposition_format() {
    let server = create_test_server();

    let response = server.get("/metrics").await;

    response.assert_status_ok();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/plain"));
}

// ============ Routing Tests ============

#[tokio::test]
async fn unknown_route_returns_not_found() {
    let server = create_test_server();

    let response = server.get("/does-not-exist").await;

    response.assert_status_not_found();
}
