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
        branch::{BranchDto, BranchRequest},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::branch::BranchService,
    },
};

pub static BRANCH_TAG: &str = "branch";

#[utoipa::path(
    get,
    path = "/api/branches",
    tag = BRANCH_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of branches", body = PageDto<BranchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_branches(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query.map_err(ValidationError::from)?;

    let page = BranchService::new(&state.db)
        .list(query.page.unwrap_or(1), state.page_size)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

#[utoipa::path(
    post,
    path = "/api/branches",
    tag = BRANCH_TAG,
    request_body = BranchRequest,
    responses(
        (status = 201, description = "Branch created", body = BranchDto),
        (status = 400, description = "Invalid branch fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_branch(
    State(state): State<AppState>,
    payload: Result<Json<BranchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload.map_err(ValidationError::from)?;

    let branch = BranchService::new(&state.db).create(request).await?;

    Ok((StatusCode::CREATED, Json(branch)))
}

#[utoipa::path(
    get,
    path = "/api/branches/{id}",
    tag = BRANCH_TAG,
    params(("id" = i32, Path, description = "Branch ID")),
    responses(
        (status = 200, description = "Branch found", body = BranchDto),
        (status = 404, description = "Branch not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_branch(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(branch_id) = id.map_err(ValidationError::from)?;

    let branch = BranchService::new(&state.db).get(branch_id).await?;

    Ok((StatusCode::OK, Json(branch)))
}

#[utoipa::path(
    put,
    path = "/api/branches/{id}",
    tag = BRANCH_TAG,
    params(("id" = i32, Path, description = "Branch ID")),
    request_body = BranchRequest,
    responses(
        (status = 200, description = "Branch updated", body = BranchDto),
        (status = 400, description = "Invalid branch fields", body = ErrorDto),
        (status = 404, description = "Branch not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_branch(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<BranchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(branch_id) = id.map_err(ValidationError::from)?;
    let Json(request) = payload.map_err(ValidationError::from)?;

    let branch = BranchService::new(&state.db)
        .update(branch_id, request)
        .await?;

    Ok((StatusCode::OK, Json(branch)))
}

#[utoipa::path(
    delete,
    path = "/api/branches/{id}",
    tag = BRANCH_TAG,
    params(("id" = i32, Path, description = "Branch ID")),
    responses(
        (status = 204, description = "Branch deactivated"),
        (status = 404, description = "Branch not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_branch(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(branch_id) = id.map_err(ValidationError::from)?;

    BranchService::new(&state.db).deactivate(branch_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
