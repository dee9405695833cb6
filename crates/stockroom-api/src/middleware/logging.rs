//! One log line per product API request.
//!
//! Lines carry the matched route template rather than the raw URI, so
//! `/api/products/{id}` aggregates across ids, and the product id is
//! recorded as its own field when the path names one.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

const PRODUCT_PREFIX: &str = "/api/products/";

/// Product id segment of a request path, if any.
fn product_id(path: &str) -> Option<&str> {
    path.strip_prefix(PRODUCT_PREFIX)
        .map(|rest| rest.trim_end_matches('/'))
        .filter(|id| !id.is_empty() && !id.contains('/'))
}

/// Logs method, route, product id, status, and duration.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let product = product_id(request.uri().path()).map(str::to_string);
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;
    let product = product.as_deref().unwrap_or("-");

    if response.status().is_server_error() {
        warn!(%method, %route, product_id = product, status, duration_ms, "Product API request failed");
    } else {
        info!(%method, %route, product_id = product, status, duration_ms, "Product API request");
    }

    response
}
