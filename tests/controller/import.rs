//! Excel uploads go through the router since `Multipart` can only be built from a request.

use axum::{body::Body, http::Request};
use rust_xlsxwriter::Workbook;
use tower::ServiceExt;
use yaazoru::model::{api::ErrorDto, import::ImportResultDto};

use super::*;

static BOUNDARY: &str = "yaazoru-test-boundary";

fn workbook(rows: &[Vec<String>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row, cells) in rows.iter().enumerate() {
        for (column, value) in cells.iter().enumerate() {
            worksheet
                .write_string(row as u32, column as u16, value)
                .expect("write cell");
        }
    }

    workbook.save_to_buffer().expect("serialize workbook")
}

fn upload(uri: &str, field: &str, file: &[u8]) -> Request<Body> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"upload.xlsx\"\r\n\
         Content-Type: application/vnd.openxmlformats-officedocument.spreadsheetml.sheet\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(file);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("build request")
}

fn device_rows() -> Vec<Vec<String>> {
    let row = |seed: u32| {
        vec![
            factory::device_number(seed),
            factory::imei(seed),
            "Nokia 2660".to_string(),
        ]
    };
    let header = ["device_number", "imei", "model"]
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut bad_imei = row(3);
    bad_imei[1] = "12345".to_string();

    vec![header, row(1), row(2), bad_imei]
}

/// Expect 200 with inserted rows counted and the bad row reported
#[tokio::test]
async fn imports_devices() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let file = workbook(&device_rows());

    let resp = test
        .into_router()
        .oneshot(upload("/api/import/devices", "file", &file))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let result: ImportResultDto = json_body(resp).await;
    assert_eq!(result.total_rows, 3);
    assert_eq!(result.inserted, 2);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].row, 4);

    Ok(())
}

/// Expect 400 when the upload has no `file` field
#[tokio::test]
async fn rejects_upload_without_file_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let file = workbook(&device_rows());

    let resp = test
        .into_router()
        .oneshot(upload("/api/import/devices", "attachment", &file))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = json_body(resp).await;
    assert_eq!(error.error, "No file was uploaded in the `file` field");

    Ok(())
}

/// Expect 400 naming the columns a customer sheet lacks
#[tokio::test]
async fn rejects_customer_sheet_missing_columns() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let file = workbook(&device_rows());

    let resp = test
        .into_router()
        .oneshot(upload("/api/import/customers", "file", &file))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = json_body(resp).await;
    assert!(error.error.starts_with("Missing required columns: first_name"));

    Ok(())
}

/// Expect 400 for a file that is not a workbook
#[tokio::test]
async fn rejects_unreadable_file() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = test
        .into_router()
        .oneshot(upload("/api/import/customers", "file", b"id,name\n1,Dana\n"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
