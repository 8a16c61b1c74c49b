use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum IntegrationError {
    #[error("{service} request failed: {source}")]
    Unreachable {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{service} responded with status {status}")]
    UpstreamStatus { service: &'static str, status: u16 },
    #[error("{service} returned an unexpected response body: {reason}")]
    InvalidResponse {
        service: &'static str,
        reason: String,
    },
    #[error("Samsung has no record of IMEI {0}")]
    UnknownImei(String),
}

impl IntoResponse for IntegrationError {
    fn into_response(self) -> Response {
        match self {
            Self::UnknownImei(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            err => {
                tracing::warn!("{}", err);

                error_response(
                    StatusCode::BAD_GATEWAY,
                    "Upstream service is unavailable, please try again later",
                )
            }
        }
    }
}
