use sea_orm::EntityTrait;
use yaazoru::{
    model::billing::{
        CreateMonthlyPaymentRequest, CreditDetailsRequest, ItemDto, ItemRequest,
        MonthlyPaymentDetailDto, MonthlyPaymentDto, MonthlyPaymentFields, PaymentDto,
        PaymentStatusRequest, UpdateMonthlyPaymentRequest,
    },
    server::controller::billing::{
        create_item, create_monthly_payment, delete_item, delete_monthly_payment,
        get_monthly_payment, list_items, list_payments, update_monthly_payment, update_payment,
    },
};

use super::*;

fn fields(customer_id: i32) -> MonthlyPaymentFields {
    MonthlyPaymentFields {
        customer_id,
        belongs_organization: Some("Yeshiva Ohr".to_string()),
        start_date: factory::date(2026, 2, 1),
        day_of_the_month: 15,
        frequency: 1,
        amount_of_charges: 6,
        amount: None,
        notes: None,
    }
}

fn item(quantity: i32, price: f64, payment_type: &str) -> ItemRequest {
    ItemRequest {
        description: "Device rental".to_string(),
        quantity,
        price,
        payment_type: payment_type.to_string(),
    }
}

fn create_request(customer_id: i32, token_seed: u32) -> CreateMonthlyPaymentRequest {
    CreateMonthlyPaymentRequest {
        fields: fields(customer_id),
        credit_details: CreditDetailsRequest {
            token: factory::card_token(token_seed),
            last_4_digits: "1881".to_string(),
            expiry_month: 6,
            expiry_year: 2029,
        },
        items: vec![item(1, 49.9, "monthly"), item(1, 250.0, "one_time")],
        payments: Vec::new(),
    }
}

mod monthly_payment {
    use super::*;

    /// Expect 201 with totals computed from the items
    #[tokio::test]
    async fn create_returns_created_plan() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .build()
            .await?;

        let result =
            create_monthly_payment(State(test.into_app_state()), Ok(Json(create_request(1, 1))))
                .await;

        let resp = into_response(result);
        assert_eq!(resp.status(), StatusCode::CREATED);
        let detail: MonthlyPaymentDetailDto = json_body(resp).await;
        assert_eq!(detail.monthly_payment.amount, 49.9);
        assert_eq!(detail.monthly_payment.one_time_payment, 250.0);
        assert_eq!(detail.monthly_payment.total_amount, 549.4);
        assert_eq!(detail.monthly_payment.end_date, factory::date(2026, 7, 1));
        assert_eq!(detail.items.len(), 2);
        assert_eq!(
            detail.credit_details.map(|card| card.last_4_digits),
            Some("1881".to_string())
        );

        Ok(())
    }

    /// Expect 400 for a day of the month past the 28th
    #[tokio::test]
    async fn create_rejects_day_past_28() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .build()
            .await?;
        let mut request = create_request(1, 1);
        request.fields.day_of_the_month = 30;

        let result =
            create_monthly_payment(State(test.into_app_state()), Ok(Json(request))).await;

        assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 404 when the customer does not exist
    #[tokio::test]
    async fn create_rejects_missing_customer() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let result =
            create_monthly_payment(State(test.into_app_state()), Ok(Json(create_request(4, 1))))
                .await;

        assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 409 for a stored card token and no plan left behind
    #[tokio::test]
    async fn create_rejects_duplicate_token_without_writing() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .build()
            .await?;
        test.billing().insert_credit_details(1, 1).await?;

        let result =
            create_monthly_payment(State(test.into_app_state()), Ok(Json(create_request(1, 1))))
                .await;

        assert_eq!(into_response(result).status(), StatusCode::CONFLICT);
        let plans = entity::prelude::MonthlyPayment::find().all(&test.db).await?;
        assert!(plans.is_empty());

        Ok(())
    }

    /// Expect 200 with the new fields and the stored card kept
    #[tokio::test]
    async fn update_returns_updated_plan() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .build()
            .await?;
        let (monthly_payment, credit_details, _) =
            test.billing().insert_linked_monthly_payment(1, 1).await?;
        let request = UpdateMonthlyPaymentRequest {
            fields: MonthlyPaymentFields {
                amount: Some(80.0),
                notes: Some("Moved to the family plan".to_string()),
                ..fields(1)
            },
            credit_details: None,
            items: None,
            payments: None,
        };

        let result = update_monthly_payment(
            State(test.into_app_state()),
            Ok(Path(monthly_payment.id)),
            Ok(Json(request)),
        )
        .await;

        let resp = into_response(result);
        assert_eq!(resp.status(), StatusCode::OK);
        let detail: MonthlyPaymentDetailDto = json_body(resp).await;
        assert_eq!(detail.monthly_payment.amount, 80.0);
        assert_eq!(detail.monthly_payment.total_amount, 480.0);
        assert_eq!(
            detail.credit_details.map(|card| card.id),
            Some(credit_details.id)
        );

        Ok(())
    }

    /// Expect 204 on deactivation and 404 for an unknown plan
    #[tokio::test]
    async fn delete_deactivates_plan() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .build()
            .await?;
        let (monthly_payment, _, _) = test.billing().insert_linked_monthly_payment(1, 1).await?;

        let result =
            delete_monthly_payment(State(test.into_app_state()), Ok(Path(monthly_payment.id)))
                .await;
        assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);

        let result =
            get_monthly_payment(State(test.into_app_state()), Ok(Path(monthly_payment.id))).await;
        let detail: MonthlyPaymentDetailDto = json_body(into_response(result)).await;
        assert_eq!(detail.monthly_payment.status, "inactive");

        let result = delete_monthly_payment(State(test.into_app_state()), Ok(Path(99))).await;
        assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod payments {
    use super::*;

    /// Expect installments listed by date
    #[tokio::test]
    async fn lists_installments_by_date() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .build()
            .await?;
        let monthly_payment = test.billing().insert_monthly_payment(1).await?;
        test.billing()
            .insert_payment(monthly_payment.id, factory::date(2026, 2, 10), "pending")
            .await?;
        test.billing()
            .insert_payment(monthly_payment.id, factory::date(2026, 1, 10), "paid")
            .await?;

        let result = list_payments(State(test.into_app_state()), Ok(Path(monthly_payment.id))).await;

        let payments: Vec<PaymentDto> = json_body(into_response(result)).await;
        let dates: Vec<_> = payments.iter().map(|payment| payment.date).collect();
        assert_eq!(
            dates,
            vec![factory::date(2026, 1, 10), factory::date(2026, 2, 10)]
        );

        Ok(())
    }

    /// Expect a paid installment to stamp the plan's last success
    #[tokio::test]
    async fn marks_installment_paid() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .build()
            .await?;
        let monthly_payment = test.billing().insert_monthly_payment(1).await?;
        let payment = test
            .billing()
            .insert_payment(monthly_payment.id, factory::date(2026, 1, 10), "pending")
            .await?;

        let result = update_payment(
            State(test.into_app_state()),
            Ok(Path(payment.id)),
            Ok(Json(PaymentStatusRequest {
                status: "paid".to_string(),
            })),
        )
        .await;

        let resp = into_response(result);
        assert_eq!(resp.status(), StatusCode::OK);
        let payment: PaymentDto = json_body(resp).await;
        assert_eq!(payment.status, "paid");

        let result =
            get_monthly_payment(State(test.into_app_state()), Ok(Path(monthly_payment.id))).await;
        let detail: MonthlyPaymentDetailDto = json_body(into_response(result)).await;
        assert!(detail.monthly_payment.last_succeeded.is_some());

        Ok(())
    }

    /// Expect 400 for an unknown installment status
    #[tokio::test]
    async fn rejects_unknown_status() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .build()
            .await?;
        let monthly_payment = test.billing().insert_monthly_payment(1).await?;
        let payment = test
            .billing()
            .insert_payment(monthly_payment.id, factory::date(2026, 1, 10), "pending")
            .await?;

        let result = update_payment(
            State(test.into_app_state()),
            Ok(Path(payment.id)),
            Ok(Json(PaymentStatusRequest {
                status: "refunded".to_string(),
            })),
        )
        .await;

        assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod items {
    use super::*;

    /// Expect a new item to replace the plan amount in its totals
    #[tokio::test]
    async fn create_recomputes_plan_totals() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .build()
            .await?;
        let monthly_payment = test.billing().insert_monthly_payment(1).await?;

        let result = create_item(
            State(test.into_app_state()),
            Ok(Path(monthly_payment.id)),
            Ok(Json(item(2, 30.0, "monthly"))),
        )
        .await;

        let resp = into_response(result);
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: ItemDto = json_body(resp).await;
        assert_eq!(created.total, 60.0);

        let result =
            get_monthly_payment(State(test.into_app_state()), Ok(Path(monthly_payment.id))).await;
        let detail: MonthlyPaymentDetailDto = json_body(into_response(result)).await;
        let plan: MonthlyPaymentDto = detail.monthly_payment;
        assert_eq!(plan.amount, 60.0);
        assert_eq!(plan.total_amount, 720.0);

        Ok(())
    }

    /// Expect 400 for a non-positive quantity
    #[tokio::test]
    async fn create_rejects_zero_quantity() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .build()
            .await?;
        let monthly_payment = test.billing().insert_monthly_payment(1).await?;

        let result = create_item(
            State(test.into_app_state()),
            Ok(Path(monthly_payment.id)),
            Ok(Json(item(0, 30.0, "monthly"))),
        )
        .await;

        assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 204 on delete, the item gone from the list, and 404 the second time
    #[tokio::test]
    async fn delete_removes_item() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .build()
            .await?;
        let monthly_payment = test.billing().insert_monthly_payment(1).await?;
        let item = test
            .billing()
            .insert_item(monthly_payment.id, 1, 100.0, "monthly")
            .await?;

        let result = delete_item(State(test.into_app_state()), Ok(Path(item.id))).await;
        assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);

        let result = list_items(State(test.into_app_state()), Ok(Path(monthly_payment.id))).await;
        let items: Vec<ItemDto> = json_body(into_response(result)).await;
        assert!(items.is_empty());

        let result = delete_item(State(test.into_app_state()), Ok(Path(item.id))).await;
        assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
