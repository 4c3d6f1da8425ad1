//! Metrics collection and exposition.
//!
//! # Metrics
//! - `fetch_requests_total` (counter): calls by outcome and reported status
//! - `fetch_request_duration_seconds` (histogram): latency by outcome

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint. Must run inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics exporter"),
    }
}

/// Record one completed fetch call.
pub fn record_fetch(outcome: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "fetch_requests_total",
        "outcome" => outcome,
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!("fetch_request_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}
