//! Success response body.
//!
//! Every successful read or write answers with `{ "message": ..., "result": ... }`.
//! Paginated listings additionally carry `page`, `limit`, `totalPages` and
//! `totalItems` at the top level.

use serde::Serialize;
use utoipa::ToSchema;

/// Pagination fields appended to a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    pub total_pages: u64,
    pub total_items: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub message: String,
    pub result: T,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageMeta>,
}

impl<T> Envelope<T> {
    pub fn new(message: impl Into<String>, result: T) -> Self {
        Self {
            message: message.into(),
            result,
            pagination: None,
        }
    }

    pub fn paginated(message: impl Into<String>, result: T, meta: PageMeta) -> Self {
        Self {
            message: message.into(),
            result,
            pagination: Some(meta),
        }
    }
}
