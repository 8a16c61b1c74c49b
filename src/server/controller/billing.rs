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
        billing::{
            CreateMonthlyPaymentRequest, ItemDto, ItemRequest, MonthlyPaymentDetailDto,
            MonthlyPaymentDto, MonthlyPaymentListQuery, PaymentDto, PaymentStatusRequest,
            UpdateMonthlyPaymentRequest,
        },
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::billing::{
            item::ItemService, monthly_payment::MonthlyPaymentService, payments::PaymentsService,
        },
    },
};

pub static BILLING_TAG: &str = "billing";

#[utoipa::path(
    get,
    path = "/api/monthly-payments",
    tag = BILLING_TAG,
    params(MonthlyPaymentListQuery),
    responses(
        (status = 200, description = "Page of monthly payments", body = PageDto<MonthlyPaymentDto>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_monthly_payments(
    State(state): State<AppState>,
    query: Result<Query<MonthlyPaymentListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query.map_err(ValidationError::from)?;

    let page = MonthlyPaymentService::new(&state.db)
        .list(query, state.page_size)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Create a monthly payment plan
///
/// The plan, its card, the card link, the installments and the items are written in a
/// single transaction. Any failure leaves none of them behind.
///
/// # Responses
/// - 201 (Created): The plan with its card, items and installments
/// - 400 (Bad Request): Invalid plan, card, item or installment fields
/// - 404 (Not Found): Customer does not exist
/// - 409 (Conflict): Card token already stored
/// - 500 (Internal Server Error): Database failure, nothing was written
#[utoipa::path(
    post,
    path = "/api/monthly-payments",
    tag = BILLING_TAG,
    request_body = CreateMonthlyPaymentRequest,
    responses(
        (status = 201, description = "Monthly payment created", body = MonthlyPaymentDetailDto),
        (status = 400, description = "Invalid monthly payment", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 409, description = "Card token already stored", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_monthly_payment(
    State(state): State<AppState>,
    payload: Result<Json<CreateMonthlyPaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload.map_err(ValidationError::from)?;

    let monthly_payment = MonthlyPaymentService::new(&state.db)
        .create(request)
        .await?;

    Ok((StatusCode::CREATED, Json(monthly_payment)))
}

#[utoipa::path(
    get,
    path = "/api/monthly-payments/{id}",
    tag = BILLING_TAG,
    params(("id" = i32, Path, description = "Monthly payment ID")),
    responses(
        (status = 200, description = "Monthly payment found", body = MonthlyPaymentDetailDto),
        (status = 404, description = "Monthly payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_monthly_payment(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(monthly_payment_id) = id.map_err(ValidationError::from)?;

    let monthly_payment = MonthlyPaymentService::new(&state.db)
        .get(monthly_payment_id)
        .await?;

    Ok((StatusCode::OK, Json(monthly_payment)))
}

/// Update a monthly payment plan
///
/// Omitted `credit_details`, `items` and `payments` keep their stored rows. All changes
/// are applied in one transaction.
#[utoipa::path(
    put,
    path = "/api/monthly-payments/{id}",
    tag = BILLING_TAG,
    params(("id" = i32, Path, description = "Monthly payment ID")),
    request_body = UpdateMonthlyPaymentRequest,
    responses(
        (status = 200, description = "Monthly payment updated", body = MonthlyPaymentDetailDto),
        (status = 400, description = "Invalid monthly payment", body = ErrorDto),
        (status = 404, description = "Monthly payment or customer not found", body = ErrorDto),
        (status = 409, description = "Card token already stored", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_monthly_payment(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateMonthlyPaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(monthly_payment_id) = id.map_err(ValidationError::from)?;
    let Json(request) = payload.map_err(ValidationError::from)?;

    let monthly_payment = MonthlyPaymentService::new(&state.db)
        .update(monthly_payment_id, request)
        .await?;

    Ok((StatusCode::OK, Json(monthly_payment)))
}

#[utoipa::path(
    delete,
    path = "/api/monthly-payments/{id}",
    tag = BILLING_TAG,
    params(("id" = i32, Path, description = "Monthly payment ID")),
    responses(
        (status = 204, description = "Monthly payment deactivated"),
        (status = 404, description = "Monthly payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_monthly_payment(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(monthly_payment_id) = id.map_err(ValidationError::from)?;

    MonthlyPaymentService::new(&state.db)
        .deactivate(monthly_payment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/monthly-payments/{id}/payments",
    tag = BILLING_TAG,
    params(("id" = i32, Path, description = "Monthly payment ID")),
    responses(
        (status = 200, description = "Installments by date", body = Vec<PaymentDto>),
        (status = 404, description = "Monthly payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_payments(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(monthly_payment_id) = id.map_err(ValidationError::from)?;

    let payments = PaymentsService::new(&state.db)
        .list_by_monthly_payment(monthly_payment_id)
        .await?;

    Ok((StatusCode::OK, Json(payments)))
}

/// Set the status of an installment
#[utoipa::path(
    put,
    path = "/api/payments/{id}",
    tag = BILLING_TAG,
    params(("id" = i32, Path, description = "Payment ID")),
    request_body = PaymentStatusRequest,
    responses(
        (status = 200, description = "Installment updated", body = PaymentDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_payment(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PaymentStatusRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(payment_id) = id.map_err(ValidationError::from)?;
    let Json(request) = payload.map_err(ValidationError::from)?;

    let payment = PaymentsService::new(&state.db)
        .update_status(payment_id, request)
        .await?;

    Ok((StatusCode::OK, Json(payment)))
}

#[utoipa::path(
    get,
    path = "/api/monthly-payments/{id}/items",
    tag = BILLING_TAG,
    params(("id" = i32, Path, description = "Monthly payment ID")),
    responses(
        (status = 200, description = "Items of the plan", body = Vec<ItemDto>),
        (status = 404, description = "Monthly payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_items(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(monthly_payment_id) = id.map_err(ValidationError::from)?;

    let items = ItemService::new(&state.db)
        .list_by_monthly_payment(monthly_payment_id)
        .await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Add an item to a plan and recompute its totals
#[utoipa::path(
    post,
    path = "/api/monthly-payments/{id}/items",
    tag = BILLING_TAG,
    params(("id" = i32, Path, description = "Monthly payment ID")),
    request_body = ItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemDto),
        (status = 400, description = "Invalid item fields", body = ErrorDto),
        (status = 404, description = "Monthly payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(monthly_payment_id) = id.map_err(ValidationError::from)?;
    let Json(request) = payload.map_err(ValidationError::from)?;

    let item = ItemService::new(&state.db)
        .create(monthly_payment_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/items/{id}",
    tag = BILLING_TAG,
    params(("id" = i32, Path, description = "Item ID")),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ItemDto),
        (status = 400, description = "Invalid item fields", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(item_id) = id.map_err(ValidationError::from)?;
    let Json(request) = payload.map_err(ValidationError::from)?;

    let item = ItemService::new(&state.db).update(item_id, request).await?;

    Ok((StatusCode::OK, Json(item)))
}

#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = BILLING_TAG,
    params(("id" = i32, Path, description = "Item ID")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(item_id) = id.map_err(ValidationError::from)?;

    ItemService::new(&state.db).delete(item_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
