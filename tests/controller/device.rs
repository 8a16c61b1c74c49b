use yaazoru::{
    model::device::{DeviceDto, DeviceRequest, SamsungStatusDto},
    server::controller::device::{
        create_device, delete_device, get_device, get_samsung_status, update_device,
    },
};

use super::*;

fn request(seed: u32) -> DeviceRequest {
    DeviceRequest {
        device_number: factory::device_number(seed),
        imei: factory::imei(seed),
        model: "Galaxy A25".to_string(),
        serial_number: None,
        purchase_date: Some(factory::date(2026, 2, 1)),
        plan_type: None,
    }
}

/// Expect 201 with the persisted device
#[tokio::test]
async fn create_returns_created_device() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = create_device(State(test.into_app_state()), Ok(Json(request(1)))).await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::CREATED);
    let device: DeviceDto = json_body(resp).await;
    assert_eq!(device.imei, factory::imei(1));

    Ok(())
}

/// Expect 400 for an IMEI with a wrong check digit
#[tokio::test]
async fn create_rejects_invalid_imei() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let mut request = request(1);
    request.imei = "350000000000000".to_string();

    let result = create_device(State(test.into_app_state()), Ok(Json(request))).await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 409 when another device has the same IMEI
#[tokio::test]
async fn update_rejects_duplicate_imei() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_device(1)
        .with_mock_device(2)
        .build()
        .await?;
    let mut request = request(2);
    request.imei = factory::imei(1);

    let result = update_device(State(test.into_app_state()), Ok(Path(2)), Ok(Json(request))).await;

    assert_eq!(into_response(result).status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 204 on deactivation and the device kept with status inactive
#[tokio::test]
async fn delete_keeps_inactive_device() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_device(1)
        .build()
        .await?;

    let result = delete_device(State(test.into_app_state()), Ok(Path(1))).await;
    assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);

    let result = get_device(State(test.into_app_state()), Ok(Path(1))).await;
    let device: DeviceDto = json_body(into_response(result)).await;
    assert_eq!(device.status, "inactive");

    Ok(())
}

mod samsung_status {
    use super::*;

    /// Expect 200 with the status reported by Samsung
    #[tokio::test]
    async fn returns_samsung_status() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_device(1)
            .with_samsung_device_endpoint(factory::imei(1), "active", 1)
            .build()
            .await?;

        let result = get_samsung_status(State(test.into_app_state()), Ok(Path(1))).await;

        let resp = into_response(result);
        assert_eq!(resp.status(), StatusCode::OK);
        let status: SamsungStatusDto = json_body(resp).await;
        assert_eq!(status.status, "active");
        assert!(status.enrolled);
        test.assert_mocks();

        Ok(())
    }

    /// Expect 502 when Samsung answers with a server error
    #[tokio::test]
    async fn returns_bad_gateway_on_upstream_error() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_all_tables()
            .with_mock_device(1)
            .build()
            .await?;
        let path = format!("/devices/{}", factory::imei(1));
        let mock = test
            .integration()
            .create_status_endpoint("GET", &path, 500, 1);

        let result = get_samsung_status(State(test.into_app_state()), Ok(Path(1))).await;

        assert_eq!(into_response(result).status(), StatusCode::BAD_GATEWAY);
        mock.assert();

        Ok(())
    }

    /// Expect 404 when Samsung has no record of the IMEI
    #[tokio::test]
    async fn returns_not_found_for_unknown_imei() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_all_tables()
            .with_mock_device(1)
            .build()
            .await?;
        let path = format!("/devices/{}", factory::imei(1));
        let mock = test
            .integration()
            .create_status_endpoint("GET", &path, 404, 1);

        let result = get_samsung_status(State(test.into_app_state()), Ok(Path(1))).await;

        assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);
        mock.assert();

        Ok(())
    }
}
