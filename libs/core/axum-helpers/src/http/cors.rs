use axum::http::{HeaderName, HeaderValue, Method, header};
use core_config::Environment;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::auth::API_KEY_HEADER;

/// CORS layer for an explicit origin list.
///
/// Allows the resource methods and the headers the auth gates read
/// (`Authorization`, `X-API-KEY`), caching preflights for an hour.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            HeaderName::from_static(API_KEY_HEADER),
        ])
        .max_age(Duration::from_secs(3600))
}

/// Allows any origin. Development only.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Split a comma-separated origin list, skipping blanks.
pub fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>().map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid CORS_ALLOWED_ORIGIN value '{s}': {e}"),
                )
            })
        })
        .collect()
}

/// Build the CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// Unset or empty is permissive in development and an error in production.
pub fn cors_layer_from_env(environment: &Environment) -> io::Result<CorsLayer> {
    let raw = std::env::var("CORS_ALLOWED_ORIGIN").unwrap_or_default();
    let origins = parse_origins(&raw)?;

    if origins.is_empty() {
        if environment.is_production() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "CORS_ALLOWED_ORIGIN is required in production. Example: CORS_ALLOWED_ORIGIN=https://example.com",
            ));
        }
        warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
        return Ok(create_permissive_cors_layer());
    }

    info!("CORS configured with allowed origins: {}", raw);
    Ok(create_cors_layer(origins))
}
