//! Request authentication.
//!
//! Two interchangeable gates, selected with `AUTH_MODE`:
//! - `api_key`: static key in the `X-API-KEY` header
//! - `jwt`: HS256 bearer tokens issued by the app's login endpoint
//!
//! ```ignore
//! use axum_helpers::auth::{AuthConfig, AuthGate, auth_middleware};
//! use core_config::FromEnv;
//!
//! let gate = AuthGate::from_config(&AuthConfig::from_env()?);
//! let protected = Router::new()
//!     .route("/things", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(gate, auth_middleware));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::{AdminCredentials, ApiKeyConfig, AuthConfig, AuthMode, JwtConfig};
pub use jwt::{JwtAuth, JwtClaims, TOKEN_TTL};
pub use middleware::{API_KEY_HEADER, AuthGate, auth_middleware, jwt_auth_middleware};
