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
        comment::{CommentDto, CommentQuery, CreateCommentRequest, UpdateCommentRequest},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::comment::CommentService,
    },
};

pub static COMMENT_TAG: &str = "comment";

/// List the comments of one entity, newest first
#[utoipa::path(
    get,
    path = "/api/comments",
    tag = COMMENT_TAG,
    params(CommentQuery),
    responses(
        (status = 200, description = "Page of comments", body = PageDto<CommentDto>),
        (status = 400, description = "Missing or unknown entity type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_comments(
    State(state): State<AppState>,
    query: Result<Query<CommentQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query.map_err(ValidationError::from)?;

    let page = CommentService::new(&state.db)
        .list(query, state.page_size)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

#[utoipa::path(
    post,
    path = "/api/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Invalid comment", body = ErrorDto),
        (status = 404, description = "Commented entity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload.map_err(ValidationError::from)?;

    let comment = CommentService::new(&state.db).create(request).await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Invalid comment", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateCommentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(comment_id) = id.map_err(ValidationError::from)?;
    let Json(request) = payload.map_err(ValidationError::from)?;

    let comment = CommentService::new(&state.db)
        .update(comment_id, request)
        .await?;

    Ok((StatusCode::OK, Json(comment)))
}

/// Delete a comment
///
/// Comments are removed outright, unlike the soft-deleted records they annotate.
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(comment_id) = id.map_err(ValidationError::from)?;

    CommentService::new(&state.db).delete(comment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
