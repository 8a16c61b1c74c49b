//! Error types for the Yaazoru server.
//!
//! Domain errors are grouped into their own enums (validation, records, import, third-party
//! integrations, configuration) and aggregated by [`Error`]. Every error implements axum's
//! `IntoResponse` so handlers can return `Result<_, Error>` and rely on `?`.

pub mod config;
pub mod import;
pub mod integration;
pub mod record;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, import::ImportError, integration::IntegrationError,
        record::RecordError, validation::ValidationError,
    },
};

/// Main error type for the Yaazoru server.
///
/// Uses `thiserror`'s `#[from]` so domain errors and library errors convert with `?`.
/// The `IntoResponse` implementation maps each variant to its HTTP status.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Malformed request payload, query or path.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Missing or conflicting database record.
    #[error(transparent)]
    RecordError(#[from] RecordError),
    /// Unusable Excel upload.
    #[error(transparent)]
    ImportError(#[from] ImportError),
    /// Failure of a third-party HTTP service.
    #[error(transparent)]
    IntegrationError(#[from] IntegrationError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// HTTP client construction error.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// Socket error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation and import errors
/// - 404 Not Found - Missing records
/// - 409 Conflict - Duplicate unique values, including unique constraint violations
///   raised by the database when a concurrent request wins the race
/// - 502 Bad Gateway - Third-party service failures
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::RecordError(err) => err.into_response(),
            Self::ImportError(err) => err.into_response(),
            Self::IntegrationError(err) => err.into_response(),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation: {}", detail);

                    error_response(StatusCode::CONFLICT, "Record already exists")
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON `ErrorDto` response with the provided status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details are not leaked
/// to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
