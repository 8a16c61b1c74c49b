//! Test utilities for building the application state and router against a test context

use axum::{body::Body, http::Response, response::IntoResponse, Router};
use serde::de::DeserializeOwned;
use yaazoru::server::{
    config::Config,
    error::Error,
    integration::IntegrationClients,
    model::app::AppState,
    router,
};
use yaazoru_test_utils::{
    constant::{
        TEST_HTTP_TIMEOUT_SECS, TEST_PAGE_SIZE, TEST_PAYMENT_GATEWAY_API_KEY,
        TEST_SAMSUNG_API_KEY, TEST_SPEECH_API_KEY, TEST_SWITCHBOARD_API_KEY,
    },
    TestContext,
};

/// Extension trait for TestContext to create the application state and router
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
    fn into_router(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let server_url = self.server_url();

        let config = Config::from_lookup(|var| match var {
            "DATABASE_URL" => Some("sqlite::memory:".to_string()),
            "PAYMENT_GATEWAY_URL" | "SAMSUNG_API_URL" | "SWITCHBOARD_URL" | "SPEECH_API_URL" => {
                Some(server_url.clone())
            }
            "PAYMENT_GATEWAY_API_KEY" => Some(TEST_PAYMENT_GATEWAY_API_KEY.to_string()),
            "SAMSUNG_API_KEY" => Some(TEST_SAMSUNG_API_KEY.to_string()),
            "SWITCHBOARD_API_KEY" => Some(TEST_SWITCHBOARD_API_KEY.to_string()),
            "SPEECH_API_KEY" => Some(TEST_SPEECH_API_KEY.to_string()),
            "HTTP_TIMEOUT_SECS" => Some(TEST_HTTP_TIMEOUT_SECS.to_string()),
            "PAGE_SIZE" => Some(TEST_PAGE_SIZE.to_string()),
            _ => None,
        })
        .expect("Test configuration is incomplete");

        AppState {
            db: self.db.clone(),
            integrations: IntegrationClients::from_config(&config)
                .expect("Failed to build integration clients"),
            page_size: config.page_size,
        }
    }

    fn into_router(&self) -> Router {
        router::routes().with_state(self.into_app_state())
    }
}

/// Reads a response body as JSON
pub async fn json_body<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}

/// Converts a handler result into its HTTP response, successful or not
pub fn into_response<T: IntoResponse>(result: Result<T, Error>) -> Response<Body> {
    match result {
        Ok(response) => response.into_response(),
        Err(err) => err.into_response(),
    }
}
