use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        import::{ImportResultDto, ImportUploadForm},
    },
    server::{
        error::{import::ImportError, validation::ValidationError, Error},
        model::app::AppState,
        service::import::ImportService,
    },
};

pub static IMPORT_TAG: &str = "import";

/// Name of the multipart field carrying the workbook
pub static FILE_FIELD: &str = "file";

/// Import customers from an Excel workbook
///
/// Expects a `multipart/form-data` body with the `.xlsx` file in the `file` field. Valid
/// rows are inserted; invalid ones are listed in the response with their row number.
///
/// # Responses
/// - 200 (OK): Import summary
/// - 400 (Bad Request): No file, unreadable or empty workbook, or missing required columns
/// - 500 (Internal Server Error): Database failure, no row was inserted
#[utoipa::path(
    post,
    path = "/api/import/customers",
    tag = IMPORT_TAG,
    request_body(content = ImportUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Import summary", body = ImportResultDto),
        (status = 400, description = "Unusable upload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_customers(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, Error> {
    let bytes = read_file(multipart).await?;

    let result = ImportService::new(&state.db)
        .import_customers(&bytes)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Import devices from an Excel workbook
#[utoipa::path(
    post,
    path = "/api/import/devices",
    tag = IMPORT_TAG,
    request_body(content = ImportUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Import summary", body = ImportResultDto),
        (status = 400, description = "Unusable upload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_devices(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, Error> {
    let bytes = read_file(multipart).await?;

    let result = ImportService::new(&state.db).import_devices(&bytes).await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Returns the content of the `file` field, skipping any other fields
async fn read_file(multipart: Result<Multipart, MultipartRejection>) -> Result<Bytes, Error> {
    let mut multipart = multipart.map_err(ValidationError::from)?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(ValidationError::from)?
    {
        if field.name() == Some(FILE_FIELD) {
            let bytes = field.bytes().await.map_err(ValidationError::from)?;

            if bytes.is_empty() {
                return Err(ImportError::MissingFile.into());
            }

            return Ok(bytes);
        }
    }

    Err(ImportError::MissingFile.into())
}
