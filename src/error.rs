//!
//! # Error Handling
//!
//! This module defines the `AppError` type used throughout the application.
//! It implements `actix_web::error::ResponseError` so handler errors are
//! converted into JSON responses, and provides `From` impls for `sqlx` and
//! `bcrypt` errors so handlers can use the `?` operator.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;

use crate::validation::FieldError;

/// Message used for every missing-record response.
pub const RECORD_NOT_FOUND: &str = "Record not found!";

/// All failures a request can end in.
///
/// Variants carrying a `String` keep the underlying detail for server-side
/// logging; the rendered response body stays generic.
#[derive(Debug)]
pub enum AppError {
    /// One or more payload fields missing or empty (HTTP 400).
    Validation(Vec<FieldError>),
    /// The referenced id does not exist. Rendered as HTTP 400, matching the
    /// API's established contract rather than 404.
    NotFound,
    /// A uniqueness constraint was violated, e.g. a duplicate username
    /// (HTTP 400).
    Conflict(String),
    /// Password hashing failed (HTTP 500).
    Hashing(String),
    /// Any other store failure (HTTP 500).
    Database(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(errors) => write!(f, "Validation failed: {} field(s)", errors.len()),
            AppError::NotFound => write!(f, "{}", RECORD_NOT_FOUND),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Hashing(msg) => write!(f, "Hashing error: {}", msg),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(errors) => HttpResponse::BadRequest().json(json!({
                "errors": errors
            })),
            AppError::NotFound => HttpResponse::BadRequest().json(json!({
                "error": RECORD_NOT_FOUND
            })),
            AppError::Conflict(msg) => {
                log::warn!("constraint violation: {}", msg);
                HttpResponse::BadRequest().json(json!({
                    "error": "Record could not be saved"
                }))
            }
            AppError::Hashing(msg) => {
                log::error!("password hashing failed: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Failed to process password"
                }))
            }
            AppError::Database(msg) => {
                log::error!("database error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `RowNotFound` maps to `NotFound`, unique-constraint violations to
/// `Conflict`, everything else to `Database`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(db.to_string())
            }
            other => AppError::Database(other.to_string()),
        }
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Hashing(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_responses() {
        let error = AppError::Validation(vec![FieldError {
            field: "content".into(),
            message: "The content field is required".into(),
        }]);
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::NotFound;
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::Conflict("duplicate key".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::Hashing("cost out of range".into());
        assert_eq!(error.error_response().status(), 500);

        let error = AppError::Database("connection reset".into());
        assert_eq!(error.error_response().status(), 500);
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let error: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, AppError::NotFound));
        assert_eq!(error.to_string(), RECORD_NOT_FOUND);
    }
}
