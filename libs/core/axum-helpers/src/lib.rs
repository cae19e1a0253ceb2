//! # Axum Helpers
//!
//! Shared plumbing for the HTTP binaries.
//!
//! - **[`auth`]**: API-key and JWT gates, selected by `AUTH_MODE`
//! - **[`server`]**: router assembly with OpenAPI UIs, health probes, graceful shutdown
//! - **[`http`]**: CORS and security headers
//! - **[`errors`]**: `AppError` and the `{ code, error, message, details }` envelope
//! - **[`extractors`]**: validated JSON bodies, pagination query
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use axum_helpers::http::cors_layer_from_env;
//! use core_config::{Environment, app_info, server::ServerConfig};
//!
//! let cors = cors_layer_from_env(&Environment::from_env())?;
//! let router = create_router::<ApiDoc>(api_routes, health_router(app_info!()), cors);
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{
    AuthConfig, AuthGate, AuthMode, JwtAuth, JwtClaims, auth_middleware, jwt_auth_middleware,
};

pub use server::{
    HealthCheckFuture, HealthResponse, ReadyResponse, ShutdownCoordinator,
    create_production_app, create_router, health_router, run_health_checks, shutdown_signal,
};

pub use http::{cors_layer_from_env, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{Pagination, PaginationParams, ValidatedJson};
