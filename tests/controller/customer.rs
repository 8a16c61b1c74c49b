use yaazoru::{
    model::{
        api::{PageDto, PageQuery},
        customer::{CustomerDto, CustomerListQuery, CustomerRequest},
        customer_device::{AssignDeviceRequest, CustomerDeviceDto},
    },
    server::controller::customer::{
        assign_device, create_customer, delete_customer, get_customer, list_customer_devices,
        list_customers, unassign_device, update_customer,
    },
};

use super::*;

fn request(seed: u32) -> CustomerRequest {
    CustomerRequest {
        first_name: "Noa".to_string(),
        last_name: "Levi".to_string(),
        id_number: factory::id_number(seed),
        email: factory::email("noa", seed),
        phone_number: factory::phone_number(seed),
        additional_phone: None,
        address: "12 Jaffa Rd".to_string(),
        city: "Jerusalem".to_string(),
    }
}

/// Expect 201 with the persisted customer
#[tokio::test]
async fn create_returns_created_customer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = create_customer(State(test.into_app_state()), Ok(Json(request(1)))).await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::CREATED);
    let customer: CustomerDto = json_body(resp).await;
    assert_eq!(customer.email, factory::email("noa", 1));
    assert_eq!(customer.status, "active");

    Ok(())
}

/// Expect 400 for an ID number with a wrong check digit
#[tokio::test]
async fn create_rejects_invalid_id_number() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let mut request = request(1);
    request.id_number = "123456789".to_string();

    let result = create_customer(State(test.into_app_state()), Ok(Json(request))).await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 409 when the e-mail belongs to another customer
#[tokio::test]
async fn create_rejects_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_customer(1)
        .build()
        .await?;
    let mut request = request(2);
    request.email = factory::email("customer", 1);

    let result = create_customer(State(test.into_app_state()), Ok(Json(request))).await;

    assert_eq!(into_response(result).status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 for a customer that does not exist
#[tokio::test]
async fn get_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = get_customer(State(test.into_app_state()), Ok(Path(42))).await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = json_body(resp).await;
    assert_eq!(body["error"], "Customer with ID 42 not found");

    Ok(())
}

/// Expect 200 with the replaced fields
#[tokio::test]
async fn update_returns_updated_customer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_customer(1)
        .build()
        .await?;
    let mut request = request(1);
    request.city = "Tel Aviv".to_string();

    let result =
        update_customer(State(test.into_app_state()), Ok(Path(1)), Ok(Json(request))).await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::OK);
    let customer: CustomerDto = json_body(resp).await;
    assert_eq!(customer.city, "Tel Aviv");

    Ok(())
}

/// Expect 204 and the customer listed as inactive afterwards
#[tokio::test]
async fn delete_deactivates_customer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_customer(1)
        .with_mock_customer(2)
        .build()
        .await?;

    let result = delete_customer(State(test.into_app_state()), Ok(Path(1))).await;
    assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);

    let query = CustomerListQuery {
        status: Some("inactive".to_string()),
        ..Default::default()
    };
    let result = list_customers(State(test.into_app_state()), Ok(Query(query))).await;

    let page: PageDto<CustomerDto> = json_body(into_response(result)).await;
    assert_eq!(page.total_items, 1);
    assert_eq!(page.data[0].id, 1);

    Ok(())
}

/// Expect 400 for an unknown status filter
#[tokio::test]
async fn list_rejects_unknown_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let query = CustomerListQuery {
        status: Some("archived".to_string()),
        ..Default::default()
    };

    let result = list_customers(State(test.into_app_state()), Ok(Query(query))).await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

mod devices {
    use super::*;

    fn assignment(device_id: i32) -> AssignDeviceRequest {
        AssignDeviceRequest {
            device_id,
            received_at: factory::date(2026, 3, 1),
            plan_end_date: Some(factory::date(2027, 3, 1)),
        }
    }

    /// Expect 201 and the assignment listed for the customer
    #[tokio::test]
    async fn assign_then_list() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .with_mock_device(1)
            .build()
            .await?;

        let result =
            assign_device(State(test.into_app_state()), Ok(Path(1)), Ok(Json(assignment(1))))
                .await;
        assert_eq!(into_response(result).status(), StatusCode::CREATED);

        let result = list_customer_devices(
            State(test.into_app_state()),
            Ok(Path(1)),
            Ok(Query(PageQuery::default())),
        )
        .await;

        let page: PageDto<CustomerDeviceDto> = json_body(into_response(result)).await;
        assert_eq!(page.total_items, 1);
        assert_eq!(page.data[0].device_id, 1);

        Ok(())
    }

    /// Expect 409 when the device is held by another customer
    #[tokio::test]
    async fn assign_rejects_device_in_use() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .with_mock_customer(2)
            .with_mock_device(1)
            .build()
            .await?;
        test.inventory().insert_customer_device(1, 1).await?;

        let result =
            assign_device(State(test.into_app_state()), Ok(Path(2)), Ok(Json(assignment(1))))
                .await;

        assert_eq!(into_response(result).status(), StatusCode::CONFLICT);

        Ok(())
    }

    /// Expect 404 for a device that does not exist
    #[tokio::test]
    async fn assign_rejects_missing_device() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .build()
            .await?;

        let result =
            assign_device(State(test.into_app_state()), Ok(Path(1)), Ok(Json(assignment(9))))
                .await;

        assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 204 when ending an assignment and 404 for an unknown one
    #[tokio::test]
    async fn unassign_ends_assignment() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .with_mock_device(1)
            .build()
            .await?;
        let assignment = test.inventory().insert_customer_device(1, 1).await?;

        let result = unassign_device(State(test.into_app_state()), Ok(Path(assignment.id))).await;
        assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);

        let result = unassign_device(State(test.into_app_state()), Ok(Path(99))).await;
        assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
