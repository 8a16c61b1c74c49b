//! Third-party HTTP mock endpoint creation utilities.
//!
//! Endpoints are registered with the context's mockito server, which stands in for every
//! third-party service at once.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{
    constant::{
        TEST_PAYMENT_GATEWAY_API_KEY, TEST_SAMSUNG_API_KEY, TEST_SPEECH_API_KEY,
        TEST_SWITCHBOARD_API_KEY,
    },
    TestContext,
};

impl TestContext {
    pub fn integration<'a>(&'a mut self) -> IntegrationFixtures<'a> {
        IntegrationFixtures { setup: self }
    }
}

pub struct IntegrationFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> IntegrationFixtures<'a> {
    /// Create a mock `POST /tokenize` endpoint returning `token` and `last_4_digits`.
    ///
    /// The mock only matches requests carrying the test API key.
    pub fn create_tokenize_endpoint(
        &mut self,
        token: &str,
        last_4_digits: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({ "token": token, "last_4_digits": last_4_digits });

        self.setup
            .server
            .mock("POST", "/tokenize")
            .match_header("x-api-key", TEST_PAYMENT_GATEWAY_API_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /devices/{imei}` endpoint reporting `status` for the device.
    pub fn create_samsung_device_endpoint(
        &mut self,
        imei: &str,
        status: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "imei": imei,
            "status": status,
            "enrolled": status != "unenrolled",
            "last_seen": "2026-01-15T08:30:00Z",
        });

        self.setup
            .server
            .mock("GET", format!("/devices/{}", imei).as_str())
            .match_header(
                "authorization",
                format!("Bearer {}", TEST_SAMSUNG_API_KEY).as_str(),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock switchboard `GET /calls?phone=` endpoint logging `count` calls.
    ///
    /// Calls alternate between inbound and outbound, one day apart starting 2026-01-01, and
    /// always have `phone_number` on the customer's end.
    pub fn create_switchboard_calls_endpoint(
        &mut self,
        phone_number: &str,
        count: usize,
        expected_requests: usize,
    ) -> Mock {
        let calls: Vec<_> = (0..count)
            .map(|i| {
                let (direction, from, to) = if i % 2 == 0 {
                    ("inbound", phone_number, "201")
                } else {
                    ("outbound", "201", phone_number)
                };

                json!({
                    "id": format!("call-{}-{}", phone_number, i),
                    "direction": direction,
                    "from": from,
                    "to": to,
                    "started_at": format!("2026-01-{:02}T09:00:00Z", i + 1),
                    "duration": 60 * (i + 1),
                    "recording_url": null,
                })
            })
            .collect();

        self.setup
            .server
            .mock("GET", "/calls")
            .match_query(Matcher::UrlEncoded("phone".into(), phone_number.into()))
            .match_header("x-api-key", TEST_SWITCHBOARD_API_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "calls": calls }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock switchboard `POST /calls` endpoint answering with a ringing `call_id`.
    pub fn create_originate_call_endpoint(
        &mut self,
        call_id: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({ "id": call_id, "status": "ringing" });

        self.setup
            .server
            .mock("POST", "/calls")
            .match_header("x-api-key", TEST_SWITCHBOARD_API_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `POST /v1/speech:recognize` endpoint with one result per transcript.
    ///
    /// Confidence drops by a tenth per result starting at 0.9. No transcripts yields a body
    /// without `results`, the way the service answers silent audio.
    pub fn create_recognize_endpoint(
        &mut self,
        transcripts: &[String],
        expected_requests: usize,
    ) -> Mock {
        let body = if transcripts.is_empty() {
            json!({ "totalBilledTime": "1s" })
        } else {
            let results: Vec<_> = transcripts
                .iter()
                .enumerate()
                .map(|(i, transcript)| {
                    json!({
                        "alternatives": [
                            { "transcript": transcript, "confidence": 0.9 - 0.1 * i as f64 }
                        ],
                        "languageCode": "he-il",
                    })
                })
                .collect();

            json!({ "results": results, "totalBilledTime": "3s" })
        };

        self.setup
            .server
            .mock("POST", "/v1/speech:recognize")
            .match_header("x-goog-api-key", TEST_SPEECH_API_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering `method path` with a bare status code.
    pub fn create_status_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
