//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type and implements `IntoResponse` for automatic error
//! handling in API endpoints.
//!
//! Optimistic concurrency conflicts are deliberately absent here: they are ordinary
//! service outcomes that controllers map to `409 Conflict`.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::FieldError},
};

/// User-facing message for a failed create, edit or delete.
pub const SAVE_FAILED_MESSAGE: &str =
    "Unable to save changes. Try again, and if the problem persists see your system administrator.";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Persisting a create, edit or delete failed.
    ///
    /// Results in 500 Internal Server Error carrying `SAVE_FAILED_MESSAGE`; the
    /// database error is only logged.
    #[error("Failed to save changes: {0}")]
    SaveFailed(#[source] sea_orm::DbErr),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Submitted values failed validation.
    ///
    /// Results in 422 Unprocessable Entity with one message per offending field.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound` variant
/// - 422 Unprocessable Entity - For `Validation` variant
/// - 500 Internal Server Error - For `SaveFailed` (with the save failure message) and
///   every other variant (with a generic message)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::Validation(field_errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDto {
                    error: "One or more fields are invalid".to_string(),
                    field_errors: field_errors.into_iter().map(FieldError::into_dto).collect(),
                    row_version: None,
                }),
            )
                .into_response(),
            Self::SaveFailed(err) => {
                tracing::error!("Failed to save changes: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new(SAVE_FAILED_MESSAGE)),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
