use super::config::AuthConfig;
use super::jwt::JwtAuth;
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

pub const API_KEY_HEADER: &str = "x-api-key";

/// The gate in front of the resource routes, built once from [`AuthConfig`].
#[derive(Clone)]
pub enum AuthGate {
    ApiKey(Arc<str>),
    Jwt(JwtAuth),
    Disabled,
}

impl AuthGate {
    pub fn from_config(config: &AuthConfig) -> Self {
        match config {
            AuthConfig::ApiKey(api_key) => AuthGate::ApiKey(Arc::from(api_key.key.as_str())),
            AuthConfig::Jwt { jwt, .. } => AuthGate::Jwt(JwtAuth::new(jwt)),
            AuthConfig::Disabled => {
                tracing::warn!("Authentication is disabled (AUTH_MODE=none)");
                AuthGate::Disabled
            }
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn check_api_key(expected: &str, headers: &HeaderMap) -> Result<(), AppError> {
    let provided = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Unauthorized("API key is missing".to_string()))?;

    if provided != expected {
        return Err(AppError::Unauthorized("Invalid API key".to_string()));
    }
    Ok(())
}

/// Authenticate with `Authorization: Bearer <jwt>` and store the
/// [`JwtClaims`](super::JwtClaims) in the request extensions.
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| AppError::Unauthorized("Authorization header missing".to_string()))?;

    let claims = auth.verify_token(token).map_err(|e| {
        tracing::debug!("JWT verification failed: {}", e);
        AppError::Unauthorized("Invalid or expired token".to_string())
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Dispatch to the configured gate.
///
/// ```ignore
/// let gate = AuthGate::from_config(&AuthConfig::from_env()?);
/// let protected = Router::new()
///     .nest("/character", characters)
///     .layer(axum::middleware::from_fn_with_state(gate, auth_middleware));
/// ```
pub async fn auth_middleware(
    State(gate): State<AuthGate>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match gate {
        AuthGate::ApiKey(expected) => {
            check_api_key(&expected, request.headers())?;
            Ok(next.run(request).await)
        }
        AuthGate::Jwt(auth) => jwt_auth_middleware(State(auth), request, next).await,
        AuthGate::Disabled => Ok(next.run(request).await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::config::{ApiKeyConfig, JwtConfig};
    use crate::auth::JwtClaims;
    use axum::{
        Extension, Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const SECRET: &str = "this-is-a-valid-secret-with-32-chars!";

    fn app(gate: AuthGate) -> Router {
        Router::new()
            .route("/protected", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn_with_state(gate, auth_middleware))
    }

    fn jwt_app(auth: JwtAuth) -> Router {
        Router::new()
            .route(
                "/whoami",
                get(|Extension(claims): Extension<JwtClaims>| async move { claims.sub }),
            )
            .layer(axum::middleware::from_fn_with_state(
                AuthGate::Jwt(auth),
                auth_middleware,
            ))
    }

    fn api_key_gate() -> AuthGate {
        AuthGate::from_config(&AuthConfig::ApiKey(ApiKeyConfig {
            key: "kakashi-1000".to_string(),
        }))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    fn get_request(uri: &str) -> axum::http::request::Builder {
        Request::builder().method("GET").uri(uri)
    }

    #[tokio::test]
    async fn test_api_key_missing() {
        let request = get_request("/protected").body(Body::empty()).unwrap();
        let (status, body) = send(app(api_key_gate()), request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("API key is missing"));
    }

    #[tokio::test]
    async fn test_api_key_wrong() {
        let request = get_request("/protected")
            .header("X-API-KEY", "guess")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(api_key_gate()), request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Invalid API key"));
    }

    #[tokio::test]
    async fn test_api_key_valid() {
        let request = get_request("/protected")
            .header("X-API-KEY", "kakashi-1000")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(api_key_gate()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_jwt_missing_header() {
        let auth = JwtAuth::new(&JwtConfig::new(SECRET).unwrap());
        let request = get_request("/whoami").body(Body::empty()).unwrap();
        let (status, body) = send(jwt_app(auth), request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Authorization header missing"));
    }

    #[tokio::test]
    async fn test_jwt_non_bearer_scheme_counts_as_missing() {
        let auth = JwtAuth::new(&JwtConfig::new(SECRET).unwrap());
        let request = get_request("/whoami")
            .header("Authorization", "Basic aG9rYWdlOnB3")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(jwt_app(auth), request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Authorization header missing"));
    }

    #[tokio::test]
    async fn test_jwt_valid_token_exposes_claims() {
        let auth = JwtAuth::new(&JwtConfig::new(SECRET).unwrap());
        let token = auth.create_token("hokage").unwrap();
        let request = get_request("/whoami")
            .header("Authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(jwt_app(auth), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "hokage");
    }

    #[tokio::test]
    async fn test_jwt_expired_token() {
        let auth = JwtAuth::new(&JwtConfig::new(SECRET).unwrap());
        let token = auth.create_token_with_ttl("hokage", -3600).unwrap();
        let request = get_request("/whoami")
            .header("Authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(jwt_app(auth), request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Invalid or expired token"));
    }

    #[tokio::test]
    async fn test_disabled_gate_lets_everything_through() {
        let request = get_request("/protected").body(Body::empty()).unwrap();
        let (status, _) = send(app(AuthGate::Disabled), request).await;
        assert_eq!(status, StatusCode::OK);
    }
}
