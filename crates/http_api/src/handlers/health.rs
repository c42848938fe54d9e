//! Health check handler

use axum::Json;
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Liveness check - is the server running?
///
/// Always succeeds while the process is alive; no dependencies are checked
/// and no span is created.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        service: "inventory-service".to_string(),
    })
}
