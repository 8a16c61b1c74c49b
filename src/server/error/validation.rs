//! Client input errors, all answered with 400 Bad Request.

use std::borrow::Cow;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::server::{error::error_response, util::validate::REQUIRED};

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error(transparent)]
    Json(#[from] JsonRejection),
    #[error(transparent)]
    Query(#[from] QueryRejection),
    #[error(transparent)]
    Path(#[from] PathRejection),
    #[error(transparent)]
    MultipartRejection(#[from] MultipartRejection),
    #[error(transparent)]
    Multipart(#[from] MultipartError),
}

impl ValidationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Keeps the first failing field, in alphabetical order, of a derived `Validate` run
impl From<ValidationErrors> for ValidationError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let Some((field, error)) = fields
            .into_iter()
            .find_map(|(field, errors)| errors.first().map(|error| (field, error)))
        else {
            return Self::invalid("request", "is invalid");
        };
        let field: &'static str = match field {
            Cow::Borrowed(field) => field,
            Cow::Owned(_) => "request",
        };

        let empty = matches!(
            error.params.get("value"),
            Some(serde_json::Value::String(value)) if value.is_empty()
        );
        if empty || error.message.as_deref() == Some(REQUIRED) {
            return Self::Required(field);
        }

        let reason = match (&error.message, error.code.as_ref()) {
            (Some(message), _) => message.to_string(),
            (None, "length") => match error.params.get("max") {
                Some(max) => format!("must be at most {} characters", max),
                None => REQUIRED.to_string(),
            },
            (None, "email") => "is not a valid e-mail address".to_string(),
            (None, code) => format!("failed the {} rule", code),
        };

        Self::Invalid { field, reason }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Json(rejection) => rejection.body_text(),
            Self::Query(rejection) => rejection.body_text(),
            Self::Path(rejection) => rejection.body_text(),
            Self::MultipartRejection(rejection) => rejection.body_text(),
            Self::Multipart(err) => err.body_text(),
            err => err.to_string(),
        };

        tracing::debug!("Validation error: {}", message);

        error_response(StatusCode::BAD_REQUEST, message)
    }
}
