//! Prometheus recorder setup and metric descriptions

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Latency buckets (seconds); sub-millisecond buckets cover in-memory reads.
const LATENCY_BUCKETS: &[f64] = &[
    0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5,
];

/// Install the Prometheus recorder and return a handle for rendering metrics.
pub fn install_prometheus_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new()
        .set_buckets(LATENCY_BUCKETS)?
        .install_recorder()
}

/// Register metric descriptions and zero the lazily-touched counters so the
/// scrape output carries HELP/TYPE lines from startup.
pub fn describe_metrics() {
    describe_counter!(
        "bookshelf_http_requests_total",
        "Total number of HTTP requests"
    );
    describe_histogram!(
        "bookshelf_http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_gauge!(
        "bookshelf_http_requests_in_flight",
        "Number of HTTP requests currently being processed"
    );
    describe_counter!(
        "bookshelf_auth_failures_total",
        "Signed requests rejected, by reason"
    );
    describe_counter!(
        "bookshelf_catalog_resets_total",
        "Number of times the catalog was restored to seed data"
    );

    counter!("bookshelf_auth_failures_total", "reason" => "missing").absolute(0);
    counter!("bookshelf_auth_failures_total", "reason" => "malformed").absolute(0);
    counter!("bookshelf_auth_failures_total", "reason" => "mismatch").absolute(0);
    counter!("bookshelf_catalog_resets_total").absolute(0);
    gauge!("bookshelf_http_requests_in_flight").set(0.0);
}
