use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        integration::{
            CallRecordDto, PlaceCallRequest, PlacedCallDto, RecognizeRequest, TokenizeRequest,
            TokenizeResponseDto, TranscriptDto,
        },
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::integration::IntegrationService,
    },
};

pub static INTEGRATION_TAG: &str = "integration";

/// Exchange a payment card for a gateway token
///
/// The card number never reaches the database; store the returned token as the plan's
/// credit details.
///
/// # Responses
/// - 200 (OK): Token and last four digits
/// - 400 (Bad Request): Card number, expiry or CVV invalid
/// - 502 (Bad Gateway): Gateway unreachable or rejected the card
#[utoipa::path(
    post,
    path = "/api/payment-gateway/tokenize",
    tag = INTEGRATION_TAG,
    request_body = TokenizeRequest,
    responses(
        (status = 200, description = "Card tokenized", body = TokenizeResponseDto),
        (status = 400, description = "Invalid card", body = ErrorDto),
        (status = 502, description = "Payment gateway request failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn tokenize_card(
    State(state): State<AppState>,
    payload: Result<Json<TokenizeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload.map_err(ValidationError::from)?;

    let token = IntegrationService::new(&state.db, &state.integrations)
        .tokenize(request)
        .await?;

    Ok((StatusCode::OK, Json(token)))
}

/// List a customer's calls logged by the switchboard
///
/// Both of the customer's phone numbers are looked up; calls are returned newest first.
///
/// # Responses
/// - 200 (OK): Calls to or from the customer
/// - 404 (Not Found): No such customer
/// - 502 (Bad Gateway): Switchboard unreachable or answered with an error
#[utoipa::path(
    get,
    path = "/api/customers/{id}/calls",
    tag = INTEGRATION_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer's calls", body = [CallRecordDto]),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 502, description = "Switchboard request failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_customer_calls(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(customer_id) = id.map_err(ValidationError::from)?;

    let calls = IntegrationService::new(&state.db, &state.integrations)
        .customer_calls(customer_id)
        .await?;

    Ok((StatusCode::OK, Json(calls)))
}

/// Ring an agent's extension and connect it to a phone number
///
/// # Responses
/// - 201 (Created): Call placed, with the switchboard's call ID
/// - 400 (Bad Request): Extension or phone number invalid
/// - 502 (Bad Gateway): Switchboard unreachable or refused the call
#[utoipa::path(
    post,
    path = "/api/switchboard/calls",
    tag = INTEGRATION_TAG,
    request_body = PlaceCallRequest,
    responses(
        (status = 201, description = "Call placed", body = PlacedCallDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 502, description = "Switchboard request failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_call(
    State(state): State<AppState>,
    payload: Result<Json<PlaceCallRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload.map_err(ValidationError::from)?;

    let call = IntegrationService::new(&state.db, &state.integrations)
        .place_call(request)
        .await?;

    Ok((StatusCode::CREATED, Json(call)))
}

/// Transcribe base64 encoded audio
#[utoipa::path(
    post,
    path = "/api/speech/recognize",
    tag = INTEGRATION_TAG,
    request_body = RecognizeRequest,
    responses(
        (status = 200, description = "Transcript", body = TranscriptDto),
        (status = 400, description = "Missing audio or invalid settings", body = ErrorDto),
        (status = 502, description = "Speech recognition request failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recognize_speech(
    State(state): State<AppState>,
    payload: Result<Json<RecognizeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload.map_err(ValidationError::from)?;

    let transcript = IntegrationService::new(&state.db, &state.integrations)
        .recognize(request)
        .await?;

    Ok((StatusCode::OK, Json(transcript)))
}
