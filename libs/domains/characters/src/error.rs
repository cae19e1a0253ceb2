use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CharacterError {
    #[error("Character '{0}' not found")]
    NotFound(String),

    #[error("No characters found matching '{0}'")]
    NoResults(String),

    #[error("Character with slug '{0}' already exists")]
    DuplicateSlug(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CharacterResult<T> = Result<T, CharacterError>;

impl From<CharacterError> for AppError {
    fn from(err: CharacterError) -> Self {
        match err {
            CharacterError::NotFound(slug) => {
                AppError::NotFound(format!("Character '{}' not found", slug))
            }
            CharacterError::NoResults(_) => AppError::NotFound("No characters found".to_string()),
            CharacterError::DuplicateSlug(slug) => {
                AppError::Conflict(format!("Character with slug '{}' already exists", slug))
            }
            CharacterError::Validation(msg) => AppError::BadRequest(msg),
            CharacterError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for CharacterError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for CharacterError {
    fn from(err: mongodb::error::Error) -> Self {
        CharacterError::Database(err.to_string())
    }
}
