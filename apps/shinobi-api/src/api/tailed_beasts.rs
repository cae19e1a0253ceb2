//! Tailed beasts API routes

use axum::Router;
use domain_tailed_beasts::{MongoTailedBeastRepository, TailedBeastService, handlers};

use crate::state::AppState;

pub async fn router(state: &AppState) -> eyre::Result<Router> {
    let repository = MongoTailedBeastRepository::with_collection(
        state.db.clone(),
        &state.config.collections.tailed_beasts,
    );
    repository.init_indexes().await?;

    Ok(handlers::router(TailedBeastService::new(repository)))
}
