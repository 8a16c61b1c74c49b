use axum::{body::Body, http::Request};
use tower::ServiceExt;
use yaazoru::model::{api::ErrorDto, customer::CustomerDto};

use super::*;

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

/// Expect a customer created through the router to be readable at its path
#[tokio::test]
async fn creates_and_reads_customer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let body = serde_json::json!({
        "first_name": "Avi",
        "last_name": "Peretz",
        "id_number": factory::id_number(4),
        "email": "Avi.Peretz@Example.com",
        "phone_number": factory::phone_number(4),
        "address": "3 HaNevi'im St",
        "city": "Safed",
    });

    let resp = test
        .into_router()
        .oneshot(json_request("POST", "/api/customers", &body.to_string()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: CustomerDto = json_body(resp).await;

    let resp = test
        .into_router()
        .oneshot(
            Request::get(format!("/api/customers/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: CustomerDto = json_body(resp).await;
    assert_eq!(fetched, created);

    Ok(())
}

/// Expect 400 with an error body for malformed JSON
#[tokio::test]
async fn rejects_malformed_json() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = test
        .into_router()
        .oneshot(json_request("POST", "/api/devices", "{\"device_number\": "))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let _: ErrorDto = json_body(resp).await;

    Ok(())
}

/// Expect 400 for a body missing a required field
#[tokio::test]
async fn rejects_body_missing_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = test
        .into_router()
        .oneshot(json_request("POST", "/api/branches", "{\"city\": \"Haifa\"}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 for a non-numeric path ID
#[tokio::test]
async fn rejects_non_numeric_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = test
        .into_router()
        .oneshot(Request::get("/api/devices/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when the comment list query lacks the entity
#[tokio::test]
async fn rejects_comment_query_without_entity() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = test
        .into_router()
        .oneshot(Request::get("/api/comments?page=1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect list endpoints to honour the page query
#[tokio::test]
async fn pages_device_list() -> Result<(), TestError> {
    let mut builder = TestBuilder::new().with_all_tables();
    for seed in 1..=12 {
        builder = builder.with_mock_device(seed);
    }
    let test = builder.build().await?;

    let resp = test
        .into_router()
        .oneshot(Request::get("/api/devices?page=2").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: serde_json::Value = json_body(resp).await;
    assert_eq!(page["page"], 2);
    assert_eq!(page["total_items"], 12);
    assert_eq!(page["total_pages"], 2);
    assert_eq!(page["data"].as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Expect the OpenAPI document to list the API paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = test
        .into_router()
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = json_body(resp).await;
    assert!(doc["paths"]["/api/monthly-payments/{id}"].is_object());
    assert!(doc["paths"]["/api/import/customers"]["post"].is_object());
    assert!(doc["paths"]["/api/customers/{id}/calls"]["get"].is_object());
    assert!(doc["paths"]["/api/switchboard/calls"]["post"].is_object());
    assert!(doc["paths"]["/api/speech/recognize"]["post"].is_object());

    Ok(())
}
