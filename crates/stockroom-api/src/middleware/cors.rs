//! Cross-origin policy for the admin front-end.
//!
//! Origins, methods and headers come from `server.cors`. A `"*"` entry
//! opens that dimension fully. Entries that fail to parse are skipped
//! with a warning instead of failing startup.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};
use tracing::warn;

use stockroom_core::config::CorsConfig;

/// Parse every entry of a list, dropping the ones that are invalid.
fn parse_entries<T: std::str::FromStr>(kind: &str, entries: &[String]) -> Vec<T> {
    entries
        .iter()
        .filter_map(|entry| match entry.parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(kind, entry = %entry, "Ignoring invalid CORS entry");
                None
            }
        })
        .collect()
}

fn is_wildcard(entries: &[String]) -> bool {
    entries.iter().any(|e| e.trim() == "*")
}

fn origins(config: &CorsConfig) -> AllowOrigin {
    if is_wildcard(&config.allowed_origins) {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parse_entries::<HeaderValue>("origin", &config.allowed_origins))
    }
}

fn headers(config: &CorsConfig) -> AllowHeaders {
    if is_wildcard(&config.allowed_headers) {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(parse_entries::<HeaderName>("header", &config.allowed_headers))
    }
}

/// Builds the CORS layer wrapped around every route.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let methods = if is_wildcard(&config.allowed_methods) {
        CorsLayer::new().allow_methods(Any)
    } else {
        CorsLayer::new().allow_methods(parse_entries::<Method>("method", &config.allowed_methods))
    };

    methods
        .allow_origin(origins(config))
        .allow_headers(headers(config))
        .max_age(Duration::from_secs(config.max_age_seconds))
}
