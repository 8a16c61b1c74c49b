use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PageDto, PageQuery},
        customer::{CustomerDto, CustomerListQuery, CustomerRequest},
        customer_device::{AssignDeviceRequest, CustomerDeviceDto},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::{customer::CustomerService, customer_device::CustomerDeviceService},
    },
};

pub static CUSTOMER_TAG: &str = "customer";

/// List customers, optionally filtered by a search term and status
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    params(CustomerListQuery),
    responses(
        (status = 200, description = "Page of customers", body = PageDto<CustomerDto>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_customers(
    State(state): State<AppState>,
    query: Result<Query<CustomerListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query.map_err(ValidationError::from)?;

    let page = CustomerService::new(&state.db)
        .list(query, state.page_size)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Create a customer
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerDto),
        (status = 400, description = "Invalid customer fields", body = ErrorDto),
        (status = 409, description = "E-mail or ID number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload.map_err(ValidationError::from)?;

    let customer = CustomerService::new(&state.db).create(request).await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer found", body = CustomerDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(customer_id) = id.map_err(ValidationError::from)?;

    let customer = CustomerService::new(&state.db).get(customer_id).await?;

    Ok((StatusCode::OK, Json(customer)))
}

/// Replace a customer's fields
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = CustomerDto),
        (status = 400, description = "Invalid customer fields", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 409, description = "E-mail or ID number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_customer(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(customer_id) = id.map_err(ValidationError::from)?;
    let Json(request) = payload.map_err(ValidationError::from)?;

    let customer = CustomerService::new(&state.db)
        .update(customer_id, request)
        .await?;

    Ok((StatusCode::OK, Json(customer)))
}

/// Deactivate a customer
///
/// The row is kept with status `inactive`.
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Customer deactivated"),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(customer_id) = id.map_err(ValidationError::from)?;

    CustomerService::new(&state.db)
        .deactivate(customer_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the device assignments of a customer
#[utoipa::path(
    get,
    path = "/api/customers/{id}/devices",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer ID"), PageQuery),
    responses(
        (status = 200, description = "Page of assignments", body = PageDto<CustomerDeviceDto>),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_customer_devices(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(customer_id) = id.map_err(ValidationError::from)?;
    let Query(query) = query.map_err(ValidationError::from)?;

    let page = CustomerDeviceService::new(&state.db)
        .list_by_customer(customer_id, query.page.unwrap_or(1), state.page_size)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Assign a device to a customer
#[utoipa::path(
    post,
    path = "/api/customers/{id}/devices",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = AssignDeviceRequest,
    responses(
        (status = 201, description = "Device assigned", body = CustomerDeviceDto),
        (status = 400, description = "Invalid assignment dates", body = ErrorDto),
        (status = 404, description = "Customer or device not found", body = ErrorDto),
        (status = 409, description = "Device already assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_device(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<AssignDeviceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(customer_id) = id.map_err(ValidationError::from)?;
    let Json(request) = payload.map_err(ValidationError::from)?;

    let assignment = CustomerDeviceService::new(&state.db)
        .assign(customer_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(assignment)))
}

/// End a device assignment
#[utoipa::path(
    delete,
    path = "/api/customer-devices/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Assignment ID")),
    responses(
        (status = 204, description = "Assignment ended"),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unassign_device(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(assignment_id) = id.map_err(ValidationError::from)?;

    CustomerDeviceService::new(&state.db)
        .unassign(assignment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
