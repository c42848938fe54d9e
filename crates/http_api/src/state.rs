//! Application state shared across handlers

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Handle for rendering the Prometheus exposition text
    pub metrics: PrometheusHandle,
}
