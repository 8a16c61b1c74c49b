use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of an Excel import
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ImportResultDto {
    /// Data rows read from the sheet, excluding the header and fully empty rows
    pub total_rows: usize,
    pub inserted: usize,
    pub errors: Vec<ImportRowErrorDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ImportRowErrorDto {
    /// Spreadsheet row number, the header being row 1
    pub row: usize,
    pub message: String,
}

/// `multipart/form-data` upload of an Excel workbook
#[derive(ToSchema)]
pub struct ImportUploadForm {
    /// `.xlsx` workbook; only the first worksheet is read
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
