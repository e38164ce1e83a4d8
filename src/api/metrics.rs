//! Prometheus scrape endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Recorder handle shared with the scrape route; `None` when metrics are off.
pub type MetricsHandle = Arc<Option<PrometheusHandle>>;

/// GET /metrics
pub async fn render(State(handle): State<MetricsHandle>) -> impl IntoResponse {
    match handle.as_ref() {
        Some(recorder) => (StatusCode::OK, recorder.render()),
        None => (
            StatusCode::NOT_FOUND,
            "Metrics are disabled (set METRICS_ENABLED=true)".to_string(),
        ),
    }
}
