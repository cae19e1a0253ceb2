use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TailedBeastError {
    #[error("Tailed beast '{0}' not found")]
    NotFound(String),

    #[error("No tailed beasts found matching '{0}'")]
    NoResults(String),

    #[error("Tailed beast with slug '{0}' already exists")]
    DuplicateSlug(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type TailedBeastResult<T> = Result<T, TailedBeastError>;

impl From<TailedBeastError> for AppError {
    fn from(err: TailedBeastError) -> Self {
        match err {
            TailedBeastError::NotFound(slug) => {
                AppError::NotFound(format!("Tailed beast '{}' not found", slug))
            }
            TailedBeastError::NoResults(_) => {
                AppError::NotFound("No tailed beasts found".to_string())
            }
            TailedBeastError::DuplicateSlug(slug) => {
                AppError::Conflict(format!("Tailed beast with slug '{}' already exists", slug))
            }
            TailedBeastError::Validation(msg) => AppError::BadRequest(msg),
            TailedBeastError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for TailedBeastError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for TailedBeastError {
    fn from(err: mongodb::error::Error) -> Self {
        TailedBeastError::Database(err.to_string())
    }
}
