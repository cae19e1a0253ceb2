//! `POST /login`, mounted only in `jwt` auth mode.

use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::{
    AppError, AuthConfig, JwtAuth, ValidatedJson,
    auth::AdminCredentials,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, UnauthorizedResponse,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// HS256 bearer token, valid for 24 hours
    pub token: String,
}

#[derive(Clone)]
pub(crate) struct LoginState {
    jwt: JwtAuth,
    admin: AdminCredentials,
}

pub fn router(auth: &AuthConfig) -> Router {
    match auth {
        AuthConfig::Jwt { jwt, admin } => Router::new()
            .route("/login", post(login))
            .with_state(LoginState {
                jwt: JwtAuth::new(jwt),
                admin: admin.clone(),
            }),
        AuthConfig::ApiKey(_) | AuthConfig::Disabled => Router::new(),
    }
}

/// Exchange admin credentials for a bearer token
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub(crate) async fn login(
    State(state): State<LoginState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if !state.admin.matches(&body.username, &body.password) {
        tracing::info!(username = %body.username, "Rejected login");
        return Err(AppError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    let token = state
        .jwt
        .create_token(&body.username)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    tracing::info!(username = %body.username, "Issued access token");
    Ok(Json(LoginResponse { token }))
}
