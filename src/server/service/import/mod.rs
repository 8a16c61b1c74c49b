//! Bulk import of customers and devices from Excel workbooks.
//!
//! The first worksheet is read with its first row as header. Every data row is validated
//! with the same rules as the single-record endpoints; invalid rows are reported with
//! their spreadsheet row number while the valid ones are inserted in one transaction.

mod sheet;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::{
        customer::CustomerRequest,
        device::DeviceRequest,
        import::{ImportResultDto, ImportRowErrorDto},
    },
    server::{
        data::{customer::CustomerRepository, device::DeviceRepository},
        error::Error,
        service::{customer, device},
    },
};

use sheet::{Sheet, SheetRow};

const CUSTOMER_COLUMNS: &[&str] = &[
    "first_name",
    "last_name",
    "id_number",
    "email",
    "phone_number",
    "address",
    "city",
];

const DEVICE_COLUMNS: &[&str] = &["device_number", "imei", "model"];

pub struct ImportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImportService<'a> {
    /// Creates a new instance of [`ImportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Imports customers from the first worksheet of an xlsx workbook
    ///
    /// Required columns: `first_name`, `last_name`, `id_number`, `email`, `phone_number`,
    /// `address`, `city`. `additional_phone` is optional.
    ///
    /// # Returns
    /// - `Ok(ImportResultDto)` - Inserted count and the rows that were rejected
    /// - `Err(Error::ImportError)` - Workbook unreadable, empty or missing required columns
    /// - `Err(Error::DbErr)` - Database operation failed, nothing is inserted
    pub async fn import_customers(&self, bytes: &[u8]) -> Result<ImportResultDto, Error> {
        let sheet = Sheet::read(bytes, CUSTOMER_COLUMNS)?;
        let mut report = ImportReport::new(sheet.rows.len());
        let mut seen = SeenValues::default();

        let txn = self.db.begin().await?;
        let repo = CustomerRepository::new(&txn);

        for row in &sheet.rows {
            let checked = check_customer(&txn, &sheet, row, &mut seen).await;

            if let Some(request) = report.record(row, checked)? {
                repo.create(request).await?;
                report.inserted += 1;
            }
        }

        txn.commit().await?;

        tracing::info!(
            total_rows = report.total_rows,
            inserted = report.inserted,
            failed = report.errors.len(),
            "Imported customers"
        );

        Ok(report.into_dto())
    }

    /// Imports devices from the first worksheet of an xlsx workbook
    ///
    /// Required columns: `device_number`, `imei`, `model`. `serial_number`,
    /// `purchase_date` and `plan_type` are optional.
    pub async fn import_devices(&self, bytes: &[u8]) -> Result<ImportResultDto, Error> {
        let sheet = Sheet::read(bytes, DEVICE_COLUMNS)?;
        let mut report = ImportReport::new(sheet.rows.len());
        let mut seen = SeenValues::default();

        let txn = self.db.begin().await?;
        let repo = DeviceRepository::new(&txn);

        for row in &sheet.rows {
            let checked = check_device(&txn, &sheet, row, &mut seen).await;

            if let Some(request) = report.record(row, checked)? {
                repo.create(request).await?;
                report.inserted += 1;
            }
        }

        txn.commit().await?;

        tracing::info!(
            total_rows = report.total_rows,
            inserted = report.inserted,
            failed = report.errors.len(),
            "Imported devices"
        );

        Ok(report.into_dto())
    }
}

async fn check_customer(
    txn: &DatabaseTransaction,
    sheet: &Sheet,
    row: &SheetRow,
    seen: &mut SeenValues,
) -> Result<Result<CustomerRequest, String>, Error> {
    let request = CustomerRequest {
        first_name: sheet.text(row, "first_name"),
        last_name: sheet.text(row, "last_name"),
        id_number: sheet.text(row, "id_number"),
        email: sheet.text(row, "email"),
        phone_number: sheet.text(row, "phone_number"),
        additional_phone: sheet.optional_text(row, "additional_phone"),
        address: sheet.text(row, "address"),
        city: sheet.text(row, "city"),
    };
    let request = match customer::normalize(request) {
        Ok(request) => request,
        Err(err) => return row_failure(err),
    };

    let unique = [
        ("email", request.email.as_str()),
        ("id_number", request.id_number.as_str()),
    ];
    if let Some(message) = seen.conflict(&unique) {
        return Ok(Err(message));
    }

    match customer::ensure_unique(txn, &request, None).await {
        Ok(()) => {
            seen.register(&unique, row.number);
            Ok(Ok(request))
        }
        Err(err) => row_failure(err),
    }
}

async fn check_device(
    txn: &DatabaseTransaction,
    sheet: &Sheet,
    row: &SheetRow,
    seen: &mut SeenValues,
) -> Result<Result<DeviceRequest, String>, Error> {
    let purchase_date = match sheet.optional_date(row, "purchase_date") {
        Ok(date) => date,
        Err(err) => return Ok(Err(err.to_string())),
    };
    let request = DeviceRequest {
        device_number: sheet.text(row, "device_number"),
        imei: sheet.text(row, "imei"),
        model: sheet.text(row, "model"),
        serial_number: sheet.optional_text(row, "serial_number"),
        purchase_date,
        plan_type: sheet.optional_text(row, "plan_type"),
    };
    let request = match device::normalize(request) {
        Ok(request) => request,
        Err(err) => return row_failure(err),
    };

    let unique = [
        ("device_number", request.device_number.as_str()),
        ("imei", request.imei.as_str()),
    ];
    if let Some(message) = seen.conflict(&unique) {
        return Ok(Err(message));
    }

    match device::ensure_unique(txn, &request, None).await {
        Ok(()) => {
            seen.register(&unique, row.number);
            Ok(Ok(request))
        }
        Err(err) => row_failure(err),
    }
}

/// Turns client errors into a row message and propagates everything else
fn row_failure<T>(err: Error) -> Result<Result<T, String>, Error> {
    match err {
        Error::ValidationError(err) => Ok(Err(err.to_string())),
        Error::RecordError(err) => Ok(Err(err.to_string())),
        err => Err(err),
    }
}

/// Unique values taken by earlier accepted rows of the same file
#[derive(Default)]
struct SeenValues(HashMap<(&'static str, String), usize>);

impl SeenValues {
    /// Describes the first field whose value an accepted row already holds
    fn conflict(&self, fields: &[(&'static str, &str)]) -> Option<String> {
        fields.iter().find_map(|(field, value)| {
            self.0
                .get(&(*field, value.to_string()))
                .map(|first| format!("{} duplicates row {}", field, first))
        })
    }

    /// Marks the values of an accepted row as taken
    fn register(&mut self, fields: &[(&'static str, &str)], row: usize) {
        for (field, value) in fields {
            self.0.insert((*field, value.to_string()), row);
        }
    }
}

struct ImportReport {
    total_rows: usize,
    inserted: usize,
    errors: Vec<ImportRowErrorDto>,
}

impl ImportReport {
    fn new(total_rows: usize) -> Self {
        Self {
            total_rows,
            inserted: 0,
            errors: Vec::new(),
        }
    }

    /// Keeps the request of a valid row, or records why the row was rejected
    fn record<T>(
        &mut self,
        row: &SheetRow,
        checked: Result<Result<T, String>, Error>,
    ) -> Result<Option<T>, Error> {
        match checked? {
            Ok(request) => Ok(Some(request)),
            Err(message) => {
                self.errors.push(ImportRowErrorDto {
                    row: row.number,
                    message,
                });
                Ok(None)
            }
        }
    }

    fn into_dto(self) -> ImportResultDto {
        ImportResultDto {
            total_rows: self.total_rows,
            inserted: self.inserted,
            errors: self.errors,
        }
    }
}
