use yaazoru::{
    model::integration::{
        CallRecordDto, PlaceCallRequest, PlacedCallDto, RecognizeRequest, TokenizeRequest,
        TokenizeResponseDto, TranscriptDto,
    },
    server::controller::integration::{
        list_customer_calls, place_call, recognize_speech, tokenize_card,
    },
};

use super::*;

fn card(card_number: String) -> TokenizeRequest {
    TokenizeRequest {
        card_number,
        expiry_month: 9,
        expiry_year: 2099,
        cvv: "321".to_string(),
    }
}

/// Expect 200 with the gateway token
#[tokio::test]
async fn returns_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tokenize_endpoint("tok_gw_77", "0016", 1)
        .build()
        .await?;

    let result =
        tokenize_card(State(test.into_app_state()), Ok(Json(card(factory::card_number(1))))).await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::OK);
    let token: TokenizeResponseDto = json_body(resp).await;
    assert_eq!(token.token, "tok_gw_77");
    test.assert_mocks();

    Ok(())
}

/// Expect 400 for a CVV of the wrong length
#[tokio::test]
async fn rejects_invalid_cvv() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let mut request = card(factory::card_number(1));
    request.cvv = "12".to_string();

    let result = tokenize_card(State(test.into_app_state()), Ok(Json(request))).await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 502 when the gateway rejects the request
#[tokio::test]
async fn returns_bad_gateway_on_gateway_error() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test
        .integration()
        .create_status_endpoint("POST", "/tokenize", 402, 1);

    let result =
        tokenize_card(State(test.into_app_state()), Ok(Json(card(factory::card_number(2))))).await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_GATEWAY);
    mock.assert();

    Ok(())
}

mod customer_calls {
    use super::*;

    /// Expect 200 with the customer's calls
    #[tokio::test]
    async fn returns_calls() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .with_switchboard_calls_endpoint(factory::phone_number(1), 3, 1)
            .build()
            .await?;

        let result = list_customer_calls(State(test.into_app_state()), Ok(Path(1))).await;

        let resp = into_response(result);
        assert_eq!(resp.status(), StatusCode::OK);
        let calls: Vec<CallRecordDto> = json_body(resp).await;
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].direction, "inbound");
        assert_eq!(calls[2].duration_seconds, 60);
        test.assert_mocks();

        Ok(())
    }

    /// Expect 404 for a missing customer
    #[tokio::test]
    async fn returns_not_found_for_missing_customer() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let result = list_customer_calls(State(test.into_app_state()), Ok(Path(5))).await;

        assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 502 when the switchboard answers with an error
    #[tokio::test]
    async fn returns_bad_gateway_on_switchboard_error() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_all_tables()
            .with_mock_customer(1)
            .build()
            .await?;
        let mock = test
            .integration()
            .create_status_endpoint("GET", "/calls", 500, 1);

        let result = list_customer_calls(State(test.into_app_state()), Ok(Path(1))).await;

        assert_eq!(into_response(result).status(), StatusCode::BAD_GATEWAY);
        mock.assert();

        Ok(())
    }
}

mod place_call {
    use super::*;

    /// Expect 201 with the switchboard's call ID
    #[tokio::test]
    async fn places_call() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_originate_call_endpoint("call-9", 1)
            .build()
            .await?;
        let request = PlaceCallRequest {
            extension: "305".to_string(),
            phone_number: factory::phone_number(4),
        };

        let result = place_call(State(test.into_app_state()), Ok(Json(request))).await;

        let resp = into_response(result);
        assert_eq!(resp.status(), StatusCode::CREATED);
        let call: PlacedCallDto = json_body(resp).await;
        assert_eq!(call.call_id, "call-9");
        test.assert_mocks();

        Ok(())
    }

    /// Expect 400 for a missing extension
    #[tokio::test]
    async fn rejects_missing_extension() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_originate_call_endpoint("call-unused", 0)
            .build()
            .await?;
        let request = PlaceCallRequest {
            extension: " ".to_string(),
            phone_number: factory::phone_number(4),
        };

        let result = place_call(State(test.into_app_state()), Ok(Json(request))).await;

        assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);
        test.assert_mocks();

        Ok(())
    }
}

mod recognize_speech {
    use super::*;

    fn audio() -> RecognizeRequest {
        RecognizeRequest {
            audio_content: "UklGRg==".to_string(),
            encoding: Some("LINEAR16".to_string()),
            sample_rate_hertz: Some(16000),
            language_code: None,
        }
    }

    /// Expect 200 with the service's transcript passed through
    #[tokio::test]
    async fn returns_transcript() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_recognize_endpoint(vec!["boker tov"], 1)
            .build()
            .await?;

        let result = recognize_speech(State(test.into_app_state()), Ok(Json(audio()))).await;

        let resp = into_response(result);
        assert_eq!(resp.status(), StatusCode::OK);
        let transcript: TranscriptDto = json_body(resp).await;
        assert_eq!(transcript.transcript, "boker tov");
        assert_eq!(transcript.confidence, Some(0.9));
        assert_eq!(transcript.language_code, "he-IL");
        test.assert_mocks();

        Ok(())
    }

    /// Expect 400 for an unsupported sample rate
    #[tokio::test]
    async fn rejects_invalid_sample_rate() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let request = RecognizeRequest {
            sample_rate_hertz: Some(1000),
            ..audio()
        };

        let result = recognize_speech(State(test.into_app_state()), Ok(Json(request))).await;

        assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 502 when the service rejects the audio
    #[tokio::test]
    async fn returns_bad_gateway_on_service_error() -> Result<(), TestError> {
        let mut test = TestBuilder::new().build().await?;
        let mock = test
            .integration()
            .create_status_endpoint("POST", "/v1/speech:recognize", 400, 1);

        let result = recognize_speech(State(test.into_app_state()), Ok(Json(audio()))).await;

        assert_eq!(into_response(result).status(), StatusCode::BAD_GATEWAY);
        mock.assert();

        Ok(())
    }
}
