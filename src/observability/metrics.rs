//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): relay requests by route, status
//! - `relay_request_duration_seconds` (histogram): relay latency by route
//! - `relay_upstream_failures_total` (counter): failed workflow calls by route
//!
//! Recording is a no-op until `init_metrics` installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_relay(route: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "relay_requests_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("relay_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_upstream_failure(route: &'static str) {
    metrics::counter!("relay_upstream_failures_total", "route" => route).increment(1);
}
