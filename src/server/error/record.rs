use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error("{entity} with this {field} already exists")]
    Duplicate {
        entity: &'static str,
        field: &'static str,
    },
    #[error("Device ID {device_id} is already assigned to customer ID {customer_id}")]
    DeviceAlreadyAssigned { device_id: i32, customer_id: i32 },
}

impl RecordError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn duplicate(entity: &'static str, field: &'static str) -> Self {
        Self::Duplicate { entity, field }
    }
}

impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Duplicate { .. } | Self::DeviceAlreadyAssigned { .. } => StatusCode::CONFLICT,
        };

        tracing::debug!("{}", self);

        error_response(status, self.to_string())
    }
}
