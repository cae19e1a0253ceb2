//! Type-safe error codes for API responses.
//!
//! Each code has a SCREAMING_SNAKE_CASE identifier for clients, an integer
//! for logs and metrics, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! ```

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    ValidationError,
    BadRequest,
    InvalidJson,
    NotFound,
    Unauthorized,
    Conflict,
    MethodNotAllowed,
    InvalidQuery,

    // Server errors (1500-1999)
    InternalError,

    // Store errors (2000-2999)
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Integer code for structured logs.
    ///
    /// - 1000-1499: client errors
    /// - 1500-1999: server errors
    /// - 2000-2999: store errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::BadRequest => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::Unauthorized => 1005,
            Self::Conflict => 1006,
            Self::MethodNotAllowed => 1007,
            Self::InvalidQuery => 1008,

            Self::InternalError => 1500,

            Self::DatabaseError => 2001,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::BadRequest => "Bad request",
            Self::InvalidJson => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::Unauthorized => "Authentication required",
            Self::Conflict => "Resource already exists",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::InvalidQuery => "Failed to parse query string",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseError => "Database error occurred",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::MethodNotAllowed.as_str(), "METHOD_NOT_ALLOWED");
        assert_eq!(ErrorCode::DatabaseError.to_string(), "DATABASE_ERROR");
    }

    #[test]
    fn test_error_code_ranges() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::Conflict.code(), 1006);
        assert!(ErrorCode::InternalError.code() >= 1500);
        assert_eq!(ErrorCode::DatabaseError.code(), 2001);
    }

    #[test]
    fn test_serde_matches_as_str() {
        for code in [
            ErrorCode::Unauthorized,
            ErrorCode::InvalidJson,
            ErrorCode::Conflict,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
            let back: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(back, code);
        }
    }
}
