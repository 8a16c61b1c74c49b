mod customers;

use rust_xlsxwriter::Workbook;
use yaazoru_test_utils::prelude::*;

use crate::server::{
    error::{import::ImportError, Error},
    service::import::ImportService,
};

/// Builds an xlsx workbook whose first sheet holds `rows`; empty strings leave the cell blank
fn workbook(rows: &[Vec<String>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row, cells) in rows.iter().enumerate() {
        for (column, value) in cells.iter().enumerate() {
            if !value.is_empty() {
                worksheet
                    .write_string(row as u32, column as u16, value)
                    .expect("write cell");
            }
        }
    }

    workbook.save_to_buffer().expect("serialize workbook")
}

fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Expect garbage bytes to be rejected as an unreadable workbook
#[tokio::test]
async fn rejects_unreadable_workbook() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let service = ImportService::new(&test.db);

    let result = service.import_customers(b"not a spreadsheet").await;

    assert!(matches!(
        result,
        Err(Error::ImportError(ImportError::UnreadableWorkbook(_)))
    ));

    Ok(())
}

/// Expect a sheet with only a header row to be rejected as empty
#[tokio::test]
async fn rejects_header_only_workbook() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let service = ImportService::new(&test.db);
    let bytes = workbook(&[cells(&["device_number", "imei", "model"])]);

    let result = service.import_devices(&bytes).await;

    assert!(matches!(
        result,
        Err(Error::ImportError(ImportError::EmptyWorkbook))
    ));

    Ok(())
}
