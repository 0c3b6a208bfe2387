//! CORS policy for browser clients submitting receipts.
//!
//! Entries that fail to parse are skipped; `"*"` in origins or headers opens
//! that dimension completely.

use crate::domain::config::CorsConfig;
use axum::http::{HeaderName, Method};
use std::str::FromStr;
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};

/// Create CORS layer from gateway config
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    if !config.enabled {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(origin_policy(&config.allowed_origins))
        .allow_methods(parse_all::<Method>(&config.allowed_methods))
        .allow_headers(header_policy(&config.allowed_headers))
        .max_age(Duration::from_secs(config.max_age))
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v.trim() == "*")
}

fn origin_policy(origins: &[String]) -> AllowOrigin {
    if is_wildcard(origins) {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(parse_all(origins))
    }
}

fn header_policy(headers: &[String]) -> AllowHeaders {
    if is_wildcard(headers) {
        AllowHeaders::from(Any)
    } else {
        AllowHeaders::list(parse_all::<HeaderName>(headers))
    }
}

fn parse_all<T: FromStr>(values: &[String]) -> Vec<T> {
    values.iter().filter_map(|v| v.trim().parse().ok()).collect()
}
