//! Placeholder credentials used when pointing integration clients at the mock server.
//!
//! These are not real credentials.

/// API key sent to the mocked payment gateway.
pub static TEST_PAYMENT_GATEWAY_API_KEY: &str = "payment_gateway_api_key";

/// API key sent to the mocked Samsung device management API.
pub static TEST_SAMSUNG_API_KEY: &str = "samsung_api_key";

/// API key sent to the mocked telephony switchboard.
pub static TEST_SWITCHBOARD_API_KEY: &str = "switchboard_api_key";

/// API key sent to the mocked Speech-to-Text API.
pub static TEST_SPEECH_API_KEY: &str = "speech_api_key";

/// Page size used by test application state.
pub static TEST_PAGE_SIZE: u64 = 10;

/// Timeout applied to integration clients in tests.
pub static TEST_HTTP_TIMEOUT_SECS: u64 = 5;
