use super::*;

use crate::server::data::customer::CustomerRepository;

const HEADER: &[&str] = &[
    "First Name",
    "Last Name",
    "ID Number",
    "Email",
    "Phone Number",
    "Additional Phone",
    "Address",
    "City",
];

fn customer_row(seed: u32) -> Vec<String> {
    vec![
        "Dana".to_string(),
        format!("Cohen {}", seed),
        factory::id_number(seed),
        factory::email("import", seed),
        factory::phone_number(seed),
        String::new(),
        format!("{} Herzl St", seed),
        "Haifa".to_string(),
    ]
}

/// Expect every valid row to be inserted with headers matched case-insensitively
#[tokio::test]
async fn inserts_valid_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let service = ImportService::new(&test.db);
    let bytes = workbook(&[cells(HEADER), customer_row(1), customer_row(2)]);

    let result = service.import_customers(&bytes).await.unwrap();

    assert_eq!(result.total_rows, 2);
    assert_eq!(result.inserted, 2);
    assert!(result.errors.is_empty());

    let stored = CustomerRepository::new(&test.db)
        .find_by_email(&factory::email("import", 2))
        .await?
        .unwrap();
    assert_eq!(stored.last_name, "Cohen 2");
    assert_eq!(stored.additional_phone, None);

    Ok(())
}

/// Expect invalid rows to be reported by spreadsheet row while the rest are inserted
#[tokio::test]
async fn reports_invalid_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let service = ImportService::new(&test.db);

    let mut bad_id = customer_row(2);
    bad_id[2] = "123456789".to_string();
    let mut missing_city = customer_row(3);
    missing_city[7] = String::new();

    let bytes = workbook(&[cells(HEADER), customer_row(1), bad_id, missing_city]);

    let result = service.import_customers(&bytes).await.unwrap();

    assert_eq!(result.total_rows, 3);
    assert_eq!(result.inserted, 1);
    let rows: Vec<usize> = result.errors.iter().map(|error| error.row).collect();
    assert_eq!(rows, vec![3, 4]);
    assert_eq!(result.errors[1].message, "city is required");

    Ok(())
}

/// Expect a value repeated within the file to be rejected on its second occurrence
#[tokio::test]
async fn reports_duplicates_within_file() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let service = ImportService::new(&test.db);

    let mut same_email = customer_row(2);
    same_email[3] = factory::email("import", 1);

    let bytes = workbook(&[cells(HEADER), customer_row(1), same_email]);

    let result = service.import_customers(&bytes).await.unwrap();

    assert_eq!(result.inserted, 1);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].row, 3);
    assert_eq!(result.errors[0].message, "email duplicates row 2");

    Ok(())
}

/// Expect values of a rejected row to stay free for later rows of the same file
#[tokio::test]
async fn ignores_values_of_rejected_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let service = ImportService::new(&test.db);

    let mut same_id = customer_row(2);
    same_id[2] = factory::id_number(1);
    let mut reused_email = customer_row(3);
    reused_email[3] = factory::email("import", 2);

    let bytes = workbook(&[cells(HEADER), customer_row(1), same_id, reused_email]);

    let result = service.import_customers(&bytes).await.unwrap();

    assert_eq!(result.inserted, 2);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].row, 3);
    assert_eq!(result.errors[0].message, "id_number duplicates row 2");

    let stored = CustomerRepository::new(&test.db)
        .find_by_email(&factory::email("import", 2))
        .await?
        .unwrap();
    assert_eq!(stored.last_name, "Cohen 3");

    Ok(())
}

/// Expect a row rejected by a stored customer not to block later rows
#[tokio::test]
async fn ignores_values_of_rows_clashing_with_stored_customers() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_customer(1)
        .build()
        .await?;
    let service = ImportService::new(&test.db);

    let mut existing_id = customer_row(5);
    existing_id[2] = factory::id_number(1);
    let mut reused_email = customer_row(6);
    reused_email[3] = factory::email("import", 5);

    let bytes = workbook(&[cells(HEADER), existing_id, reused_email]);

    let result = service.import_customers(&bytes).await.unwrap();

    assert_eq!(result.inserted, 1);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].row, 2);

    Ok(())
}

/// Expect rows clashing with stored customers to be reported as duplicates
#[tokio::test]
async fn reports_duplicates_of_stored_customers() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_customer(1)
        .build()
        .await?;
    let service = ImportService::new(&test.db);

    let mut existing_id = customer_row(5);
    existing_id[2] = factory::id_number(1);

    let bytes = workbook(&[cells(HEADER), existing_id, customer_row(6)]);

    let result = service.import_customers(&bytes).await.unwrap();

    assert_eq!(result.inserted, 1);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].row, 2);
    assert!(result.errors[0].message.contains("id_number"));

    Ok(())
}

/// Expect fully empty rows to be skipped without shifting row numbers
#[tokio::test]
async fn skips_empty_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let service = ImportService::new(&test.db);

    let mut bad_email = customer_row(2);
    bad_email[3] = "not-an-email".to_string();

    let bytes = workbook(&[
        cells(HEADER),
        customer_row(1),
        cells(&["", "", "", "", "", "", "", ""]),
        bad_email,
    ]);

    let result = service.import_customers(&bytes).await.unwrap();

    assert_eq!(result.total_rows, 2);
    assert_eq!(result.inserted, 1);
    assert_eq!(result.errors[0].row, 4);

    Ok(())
}

/// Expect a sheet without required columns to be rejected before any insert
#[tokio::test]
async fn rejects_missing_columns() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let service = ImportService::new(&test.db);
    let bytes = workbook(&[
        cells(&["first_name", "last_name", "email"]),
        cells(&["Dana", "Cohen", "dana@example.com"]),
    ]);

    let result = service.import_customers(&bytes).await;

    match result {
        Err(Error::ImportError(ImportError::MissingColumns(columns))) => {
            assert_eq!(
                columns,
                vec!["id_number", "phone_number", "address", "city"]
            );
        }
        other => panic!("Expected MissingColumns, got {:?}", other),
    }

    Ok(())
}
