//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness endpoint
        .route("/health", get(handlers::health::health_check))
        // Prometheus exposition endpoint
        .route("/metrics", get(handlers::metrics::prometheus_metrics))
        // Mock inventory endpoint
        .route("/items", get(handlers::items::list_items))
        // Attach state
        .with_state(state)
}
