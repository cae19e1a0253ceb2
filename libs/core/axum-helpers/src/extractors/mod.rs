//! Custom extractors for Axum handlers.

pub mod pagination;
pub mod validated_json;

pub use pagination::{Pagination, PaginationParams};
pub use validated_json::ValidatedJson;
