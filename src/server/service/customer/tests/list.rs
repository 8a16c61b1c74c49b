use crate::model::customer::CustomerListQuery;

use super::*;

/// Expect the search term to match on e-mail
#[tokio::test]
async fn filters_by_search_term() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_customer(1)
        .with_mock_customer(2)
        .build()
        .await?;
    let service = CustomerService::new(&test.db);

    let page = service
        .list(
            CustomerListQuery {
                search: Some(factory::email("customer", 2)),
                ..Default::default()
            },
            10,
        )
        .await
        .unwrap();

    assert_eq!(page.total_items, 1);
    assert_eq!(page.data[0].email, factory::email("customer", 2));

    Ok(())
}

/// Expect an unknown status filter to be rejected
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let service = CustomerService::new(&test.db);

    let result = service
        .list(
            CustomerListQuery {
                status: Some("archived".to_string()),
                ..Default::default()
            },
            10,
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::Invalid {
            field: "status",
            ..
        }))
    ));

    Ok(())
}
