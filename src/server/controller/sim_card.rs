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
        sim_card::{SimCardDto, SimCardListQuery, SimCardRequest},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::sim_card::SimCardService,
    },
};

pub static SIM_CARD_TAG: &str = "sim_card";

#[utoipa::path(
    get,
    path = "/api/sim-cards",
    tag = SIM_CARD_TAG,
    params(SimCardListQuery),
    responses(
        (status = 200, description = "Page of SIM cards", body = PageDto<SimCardDto>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sim_cards(
    State(state): State<AppState>,
    query: Result<Query<SimCardListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query.map_err(ValidationError::from)?;

    let page = SimCardService::new(&state.db)
        .list(query, state.page_size)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

#[utoipa::path(
    post,
    path = "/api/sim-cards",
    tag = SIM_CARD_TAG,
    request_body = SimCardRequest,
    responses(
        (status = 201, description = "SIM card created", body = SimCardDto),
        (status = 400, description = "Invalid SIM card fields", body = ErrorDto),
        (status = 404, description = "Referenced customer or device not found", body = ErrorDto),
        (status = 409, description = "SIM number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_sim_card(
    State(state): State<AppState>,
    payload: Result<Json<SimCardRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload.map_err(ValidationError::from)?;

    let sim_card = SimCardService::new(&state.db).create(request).await?;

    Ok((StatusCode::CREATED, Json(sim_card)))
}

#[utoipa::path(
    get,
    path = "/api/sim-cards/{id}",
    tag = SIM_CARD_TAG,
    params(("id" = i32, Path, description = "SIM card ID")),
    responses(
        (status = 200, description = "SIM card found", body = SimCardDto),
        (status = 404, description = "SIM card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sim_card(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(sim_card_id) = id.map_err(ValidationError::from)?;

    let sim_card = SimCardService::new(&state.db).get(sim_card_id).await?;

    Ok((StatusCode::OK, Json(sim_card)))
}

#[utoipa::path(
    put,
    path = "/api/sim-cards/{id}",
    tag = SIM_CARD_TAG,
    params(("id" = i32, Path, description = "SIM card ID")),
    request_body = SimCardRequest,
    responses(
        (status = 200, description = "SIM card updated", body = SimCardDto),
        (status = 400, description = "Invalid SIM card fields", body = ErrorDto),
        (status = 404, description = "SIM card or referenced record not found", body = ErrorDto),
        (status = 409, description = "SIM number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_sim_card(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<SimCardRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(sim_card_id) = id.map_err(ValidationError::from)?;
    let Json(request) = payload.map_err(ValidationError::from)?;

    let sim_card = SimCardService::new(&state.db)
        .update(sim_card_id, request)
        .await?;

    Ok((StatusCode::OK, Json(sim_card)))
}

#[utoipa::path(
    delete,
    path = "/api/sim-cards/{id}",
    tag = SIM_CARD_TAG,
    params(("id" = i32, Path, description = "SIM card ID")),
    responses(
        (status = 204, description = "SIM card deactivated"),
        (status = 404, description = "SIM card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_sim_card(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(sim_card_id) = id.map_err(ValidationError::from)?;

    SimCardService::new(&state.db)
        .deactivate(sim_card_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
