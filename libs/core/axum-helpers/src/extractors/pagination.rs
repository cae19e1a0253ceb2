use crate::errors::AppError;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use core_resource::PageRequest;
use serde::Deserialize;
use utoipa::IntoParams;

/// Raw `?page=&limit=` query, documented for OpenAPI.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-based page number; omit to list everything
    #[param(value_type = Option<i64>, minimum = 1)]
    pub page: Option<String>,
    /// Page size; omit to list everything
    #[param(value_type = Option<i64>, minimum = 1)]
    pub limit: Option<String>,
}

impl PaginationParams {
    /// A supplied value must be an integer >= 1. An absent value becomes 0,
    /// which the listing treats as "no window".
    pub fn into_page_request(self) -> Result<PageRequest, AppError> {
        let page = parse_positive(self.page.as_deref(), "Invalid page number")?;
        let limit = parse_positive(self.limit.as_deref(), "Invalid limit number")?;
        Ok(PageRequest::new(page, limit))
    }
}

fn parse_positive(raw: Option<&str>, message: &str) -> Result<i64, AppError> {
    match raw {
        None => Ok(0),
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(AppError::BadRequest(message.to_string())),
        },
    }
}

/// Extracts a validated [`PageRequest`] from the query string.
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageRequest);

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state).await?;
        Ok(Pagination(params.into_page_request()?))
    }
}
