use yaazoru::{
    model::{
        api::PageDto,
        sim_card::{SimCardDto, SimCardListQuery, SimCardRequest},
    },
    server::controller::sim_card::{
        create_sim_card, delete_sim_card, list_sim_cards, update_sim_card,
    },
};

use super::*;

fn request(seed: u32) -> SimCardRequest {
    SimCardRequest {
        sim_number: factory::sim_number(seed),
        customer_id: None,
        device_id: None,
        received_at: None,
        plan_end_date: None,
    }
}

/// Expect 201 for a SIM card linked to an existing customer and device
#[tokio::test]
async fn create_returns_linked_sim_card() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_customer(1)
        .with_mock_device(1)
        .build()
        .await?;
    let request = SimCardRequest {
        customer_id: Some(1),
        device_id: Some(1),
        ..request(1)
    };

    let result = create_sim_card(State(test.into_app_state()), Ok(Json(request))).await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::CREATED);
    let sim_card: SimCardDto = json_body(resp).await;
    assert_eq!(sim_card.customer_id, Some(1));
    assert_eq!(sim_card.device_id, Some(1));

    Ok(())
}

/// Expect 404 when the referenced customer does not exist
#[tokio::test]
async fn create_rejects_missing_customer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let request = SimCardRequest {
        customer_id: Some(5),
        ..request(1)
    };

    let result = create_sim_card(State(test.into_app_state()), Ok(Json(request))).await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 for a SIM number that is too short
#[tokio::test]
async fn create_rejects_short_sim_number() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let request = SimCardRequest {
        sim_number: "8997201".to_string(),
        ..request(1)
    };

    let result = create_sim_card(State(test.into_app_state()), Ok(Json(request))).await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 409 when the SIM number is taken by another card
#[tokio::test]
async fn update_rejects_duplicate_sim_number() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    test.inventory().insert_sim_card(1, None, None).await?;
    let second = test.inventory().insert_sim_card(2, None, None).await?;

    let result = update_sim_card(
        State(test.into_app_state()),
        Ok(Path(second.id)),
        Ok(Json(request(1))),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect deactivated cards to drop out of the active listing
#[tokio::test]
async fn delete_then_list_active() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let first = test.inventory().insert_sim_card(1, None, None).await?;
    test.inventory().insert_sim_card(2, None, None).await?;

    let result = delete_sim_card(State(test.into_app_state()), Ok(Path(first.id))).await;
    assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);

    let query = SimCardListQuery {
        status: Some("active".to_string()),
        ..Default::default()
    };
    let result = list_sim_cards(State(test.into_app_state()), Ok(Query(query))).await;

    let page: PageDto<SimCardDto> = json_body(into_response(result)).await;
    assert_eq!(page.total_items, 1);
    assert_eq!(page.data[0].sim_number, factory::sim_number(2));

    Ok(())
}
