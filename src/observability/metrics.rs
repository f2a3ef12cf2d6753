//! Metrics collection and exposition.
//!
//! # Metrics
//! - `route_describer_requests_total` (counter): description requests by status
//! - `route_describer_routes` (histogram): routes returned per description
//! - `route_describer_duration_seconds` (histogram): resolve + render time

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one answered description request.
pub fn record_description(status: u16, routes: usize, start_time: Instant) {
    let status = status.to_string();
    ::metrics::counter!("route_describer_requests_total", "status" => status).increment(1);
    ::metrics::histogram!("route_describer_routes").record(routes as f64);
    ::metrics::histogram!("route_describer_duration_seconds")
        .record(start_time.elapsed().as_secs_f64());
}
