//! API routes, nested under `/api` by `axum_helpers::create_router`.

pub mod auth;
pub mod characters;
pub mod health;
pub mod tailed_beasts;

use axum::{Router, middleware};
use axum_helpers::{AuthConfig, AuthGate, auth_middleware};

use crate::state::AppState;

pub async fn routes(state: &AppState) -> eyre::Result<Router> {
    let (characters, tailed_beasts) = tokio::try_join!(
        characters::router(state),
        tailed_beasts::router(state)
    )?;

    Ok(Router::new()
        .merge(protected(characters, tailed_beasts, &state.config.auth))
        .merge(auth::router(&state.config.auth))
        .merge(health::router(state.clone())))
}

/// Resource routes behind the configured auth gate.
pub fn protected(characters: Router, tailed_beasts: Router, auth: &AuthConfig) -> Router {
    Router::new()
        .nest("/character", characters)
        .nest("/tailedbeast", tailed_beasts)
        .layer(middleware::from_fn_with_state(
            AuthGate::from_config(auth),
            auth_middleware,
        ))
}
