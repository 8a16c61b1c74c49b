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
        api::{ErrorDto, PageDto},
        device::{DeviceDto, DeviceListQuery, DeviceRequest, SamsungStatusDto},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::{device::DeviceService, integration::IntegrationService},
    },
};

pub static DEVICE_TAG: &str = "device";

#[utoipa::path(
    get,
    path = "/api/devices",
    tag = DEVICE_TAG,
    params(DeviceListQuery),
    responses(
        (status = 200, description = "Page of devices", body = PageDto<DeviceDto>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_devices(
    State(state): State<AppState>,
    query: Result<Query<DeviceListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query.map_err(ValidationError::from)?;

    let page = DeviceService::new(&state.db)
        .list(query, state.page_size)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

#[utoipa::path(
    post,
    path = "/api/devices",
    tag = DEVICE_TAG,
    request_body = DeviceRequest,
    responses(
        (status = 201, description = "Device created", body = DeviceDto),
        (status = 400, description = "Invalid device fields", body = ErrorDto),
        (status = 409, description = "Device number or IMEI already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_device(
    State(state): State<AppState>,
    payload: Result<Json<DeviceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload.map_err(ValidationError::from)?;

    let device = DeviceService::new(&state.db).create(request).await?;

    Ok((StatusCode::CREATED, Json(device)))
}

#[utoipa::path(
    get,
    path = "/api/devices/{id}",
    tag = DEVICE_TAG,
    params(("id" = i32, Path, description = "Device ID")),
    responses(
        (status = 200, description = "Device found", body = DeviceDto),
        (status = 404, description = "Device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_device(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(device_id) = id.map_err(ValidationError::from)?;

    let device = DeviceService::new(&state.db).get(device_id).await?;

    Ok((StatusCode::OK, Json(device)))
}

#[utoipa::path(
    put,
    path = "/api/devices/{id}",
    tag = DEVICE_TAG,
    params(("id" = i32, Path, description = "Device ID")),
    request_body = DeviceRequest,
    responses(
        (status = 200, description = "Device updated", body = DeviceDto),
        (status = 400, description = "Invalid device fields", body = ErrorDto),
        (status = 404, description = "Device not found", body = ErrorDto),
        (status = 409, description = "Device number or IMEI already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_device(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<DeviceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(device_id) = id.map_err(ValidationError::from)?;
    let Json(request) = payload.map_err(ValidationError::from)?;

    let device = DeviceService::new(&state.db)
        .update(device_id, request)
        .await?;

    Ok((StatusCode::OK, Json(device)))
}

#[utoipa::path(
    delete,
    path = "/api/devices/{id}",
    tag = DEVICE_TAG,
    params(("id" = i32, Path, description = "Device ID")),
    responses(
        (status = 204, description = "Device deactivated"),
        (status = 404, description = "Device not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_device(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(device_id) = id.map_err(ValidationError::from)?;

    DeviceService::new(&state.db).deactivate(device_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Look up a device's management status at Samsung
///
/// # Responses
/// - 200 (OK): Status reported by Samsung for the device's IMEI
/// - 404 (Not Found): No such device, or Samsung has no record of its IMEI
/// - 502 (Bad Gateway): Samsung unreachable or answered with an error
#[utoipa::path(
    get,
    path = "/api/devices/{id}/samsung-status",
    tag = DEVICE_TAG,
    params(("id" = i32, Path, description = "Device ID")),
    responses(
        (status = 200, description = "Samsung status", body = SamsungStatusDto),
        (status = 404, description = "Device or IMEI not found", body = ErrorDto),
        (status = 502, description = "Samsung request failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_samsung_status(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(device_id) = id.map_err(ValidationError::from)?;

    let status = IntegrationService::new(&state.db, &state.integrations)
        .samsung_status(device_id)
        .await?;

    Ok((StatusCode::OK, Json(status)))
}
