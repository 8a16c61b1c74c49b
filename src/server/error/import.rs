use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Errors rejecting an Excel upload as a whole; per-row problems are reported in the
/// import result instead.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("No file was uploaded in the `file` field")]
    MissingFile,
    #[error("Failed to read workbook: {0}")]
    UnreadableWorkbook(String),
    #[error("Workbook has no data")]
    EmptyWorkbook,
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

impl IntoResponse for ImportError {
    fn into_response(self) -> Response {
        tracing::debug!("Import rejected: {}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
