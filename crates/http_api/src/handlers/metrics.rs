//! Prometheus exposition handler
//!
//! Rendering is delegated entirely to the `metrics-exporter-prometheus`
//! recorder; this handler only serves its output.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Content type of the Prometheus text exposition format
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Render the current metrics in Prometheus text format
pub async fn prometheus_metrics(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
        state.metrics.render(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use metrics_exporter_prometheus::PrometheusBuilder;

    use super::*;

    #[tokio::test]
    async fn renders_with_exposition_content_type() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let state = AppState {
            metrics: recorder.handle(),
        };

        let response = prometheus_metrics(State(state)).await;

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/plain"));
    }
}
