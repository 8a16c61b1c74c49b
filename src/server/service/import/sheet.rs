//! Reading the first worksheet of an uploaded `.xlsx` workbook.

use std::{collections::HashMap, io::Cursor};

use calamine::{open_workbook_from_rs, Data, DataType, Reader, Xlsx, XlsxError};
use chrono::NaiveDate;

use crate::server::error::{import::ImportError, validation::ValidationError};

/// Data row of a worksheet with its 1-based spreadsheet row number
pub struct SheetRow {
    pub number: usize,
    cells: Vec<Data>,
}

/// Header and data rows of the first worksheet
pub struct Sheet {
    columns: HashMap<String, usize>,
    pub rows: Vec<SheetRow>,
}

impl Sheet {
    /// Parses `bytes` as an xlsx workbook, requiring every column in `required`
    ///
    /// Header names are matched case-insensitively with spaces read as underscores.
    /// Unknown columns are ignored and fully empty rows are skipped.
    pub fn read(bytes: &[u8], required: &[&str]) -> Result<Self, ImportError> {
        let mut workbook: Xlsx<Cursor<&[u8]>> = open_workbook_from_rs(Cursor::new(bytes))
            .map_err(|e: XlsxError| ImportError::UnreadableWorkbook(e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or(ImportError::EmptyWorkbook)?
            .map_err(|e: XlsxError| ImportError::UnreadableWorkbook(e.to_string()))?;

        let mut rows = range.rows();
        let header = rows.next().ok_or(ImportError::EmptyWorkbook)?;

        let columns: HashMap<String, usize> = header
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| {
                let name = cell_text(cell)?;
                Some((name.to_lowercase().replace(' ', "_"), index))
            })
            .collect();

        let missing: Vec<String> = required
            .iter()
            .filter(|name| !columns.contains_key(**name))
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ImportError::MissingColumns(missing));
        }

        // The header is spreadsheet row 1 relative to the start of the used range
        let first_row = range.start().map(|(row, _)| row as usize + 1).unwrap_or(1);
        let rows: Vec<SheetRow> = rows
            .enumerate()
            .filter(|(_, cells)| cells.iter().any(|cell| cell_text(cell).is_some()))
            .map(|(index, cells)| SheetRow {
                number: first_row + index + 1,
                cells: cells.to_vec(),
            })
            .collect();

        if rows.is_empty() {
            return Err(ImportError::EmptyWorkbook);
        }

        Ok(Self { columns, rows })
    }

    /// Trimmed text of `column` in `row`; empty cells and unknown columns give an empty string
    pub fn text(&self, row: &SheetRow, column: &str) -> String {
        self.cell(row, column)
            .and_then(cell_text)
            .unwrap_or_default()
    }

    /// Optional text of `column`; blank cells become `None`
    pub fn optional_text(&self, row: &SheetRow, column: &str) -> Option<String> {
        self.cell(row, column).and_then(cell_text)
    }

    /// Date of `column`, read from a date cell or `YYYY-MM-DD` / `DD/MM/YYYY` text
    pub fn optional_date(
        &self,
        row: &SheetRow,
        column: &'static str,
    ) -> Result<Option<NaiveDate>, ValidationError> {
        let Some(cell) = self.cell(row, column) else {
            return Ok(None);
        };
        if let Some(date) = cell.as_date() {
            return Ok(Some(date));
        }
        let Some(text) = cell_text(cell) else {
            return Ok(None);
        };

        NaiveDate::parse_from_str(&text, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&text, "%d/%m/%Y"))
            .map(Some)
            .map_err(|_| ValidationError::invalid(column, "is not a valid date"))
    }

    fn cell<'r>(&self, row: &'r SheetRow, column: &str) -> Option<&'r Data> {
        let index = *self.columns.get(column)?;
        row.cells.get(index)
    }
}

/// Cell content as trimmed text, `None` when blank
///
/// Whole numbers are written without a fractional part so numeric ID, phone and IMEI
/// cells read the same as text cells.
fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::Float(value) if value.fract() == 0.0 && value.abs() < 1e17 => {
            format!("{}", *value as i64)
        }
        other => other.to_string(),
    };
    let text = text.trim();

    (!text.is_empty()).then(|| text.to_string())
}
