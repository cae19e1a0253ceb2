//! Characters API routes

use axum::Router;
use domain_characters::{CharacterService, MongoCharacterRepository, handlers};

use crate::state::AppState;

pub async fn router(state: &AppState) -> eyre::Result<Router> {
    let repository = MongoCharacterRepository::with_collection(
        state.db.clone(),
        &state.config.collections.characters,
    );
    repository.init_indexes().await?;

    Ok(handlers::router(CharacterService::new(repository)))
}
