use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A single page of a list endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    pub data: Vec<T>,
    /// 1-based page number
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

/// `?page=N` query for list endpoints without filters
#[derive(Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number, defaults to 1
    pub page: Option<u64>,
}
