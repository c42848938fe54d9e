//! Mock inventory handler

use std::time::Duration;

use axum::{Json, http::HeaderMap};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::propagation;

/// Fixed mock inventory returned by every request
const ITEM_NAMES: [&str; 3] = ["Server-Rack", "Kafka-Broker-X1", "Postgres-Disk-SSD"];

/// Simulated backend latency per request
const SIMULATED_BACKEND_LATENCY: Duration = Duration::from_millis(50);

/// Inventory listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<String>,
    /// RFC3339 instant at which the response was produced
    pub timestamp: String,
}

/// List the mock inventory
///
/// Opens a `get-items` span parented on the inbound trace context when a
/// `traceparent` header is present. The span closes when the instrumented
/// future completes, before the response is written, on every exit path.
pub async fn list_items(headers: HeaderMap) -> Json<ItemsResponse> {
    let span = tracing::info_span!("get-items");
    span.set_parent(propagation::parent_context(&headers));

    async {
        metrics::counter!("items_requests_total").increment(1);

        // Simulated backend work; suspends only this request's task.
        tokio::time::sleep(SIMULATED_BACKEND_LATENCY).await;

        Json(ItemsResponse {
            items: ITEM_NAMES.iter().map(ToString::to_string).collect(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
    .instrument(span)
    .await
}
