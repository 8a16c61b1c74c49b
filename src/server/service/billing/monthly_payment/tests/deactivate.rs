use entity::prelude::*;
use sea_orm::EntityTrait;

use super::*;

/// Expect the plan and its active link to become inactive
#[tokio::test]
async fn deactivates_plan_and_link() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_mock_customer(1)
        .build()
        .await?;
    let (plan, _, link) = test.billing().insert_linked_monthly_payment(1, 1).await?;
    let service = MonthlyPaymentService::new(&test.db);

    service.deactivate(plan.id).await.unwrap();

    let plan = MonthlyPayment::find_by_id(plan.id).one(&test.db).await?;
    let link = PaymentCreditLink::find_by_id(link.id).one(&test.db).await?;
    assert_eq!(plan.map(|p| p.status), Some("inactive".to_string()));
    assert_eq!(link.map(|l| l.status), Some("inactive".to_string()));

    Ok(())
}

/// Expect NotFound for a missing plan
#[tokio::test]
async fn fails_for_missing_plan() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let service = MonthlyPaymentService::new(&test.db);

    let result = service.deactivate(1).await;

    assert!(matches!(
        result,
        Err(Error::RecordError(RecordError::NotFound { id: 1, .. }))
    ));

    Ok(())
}
