//! Request Logging Middleware
//! Mission: One structured line per request with method, path, status, latency

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{info, warn};

/// Log every request after it completes. Health probes are skipped so the
/// log stays readable under liveness polling.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    if path == "/health" {
        return next.run(request).await;
    }

    let start = Instant::now();
    let response = next.run(request).await;
    let latency_ms = start.elapsed().as_millis();
    let status = response.status();

    if status.is_server_error() {
        warn!(
            "{} {} -> {} ({}ms)",
            method,
            path,
            status.as_u16(),
            latency_ms
        );
    } else {
        info!(
            "{} {} -> {} ({}ms)",
            method,
            path,
            status.as_u16(),
            latency_ms
        );
    }

    response
}
