/// Errors raised while connecting to or probing the document store.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// The server could not be reached (after retries, when enabled)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
