use axum_helpers::{cors_layer_from_env, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    // A missing .env file is fine; real environment variables still apply.
    let dotenv = dotenvy::dotenv();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }
    info!(
        auth_mode = %config.auth.mode(),
        database = %config.mongodb.database(),
        "Starting {} v{}",
        config.app.name,
        config.app.version
    );

    let mongo_client = database::mongodb::connect_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(config.mongodb.database());

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let api_routes = api::routes(&state).await?;
    let cors = cors_layer_from_env(&state.config.environment)?;
    let router = create_router::<openapi::ApiDoc>(
        api_routes,
        health_router(state.config.app),
        cors,
    );

    let mongo_client = state.mongo_client.clone();
    create_production_app(router, &state.config.server, SHUTDOWN_TIMEOUT, async move {
        info!("Shutting down: closing MongoDB connections");
        mongo_client.shutdown().await;
        info!("MongoDB connections closed");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shinobi API shutdown complete");
    Ok(())
}
