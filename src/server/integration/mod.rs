//! HTTP clients for third-party services.
//!
//! Calls are made once with the configured timeout; failures surface as
//! [`IntegrationError`](crate::server::error::integration::IntegrationError) and are never
//! retried.

pub mod payment_gateway;
pub mod samsung;
pub mod speech;
pub mod switchboard;

use crate::server::config::Config;

use payment_gateway::PaymentGatewayClient;
use samsung::SamsungClient;
use speech::SpeechClient;
use switchboard::SwitchboardClient;

/// Clients of every third-party service, sharing one connection pool
#[derive(Clone)]
pub struct IntegrationClients {
    pub payment_gateway: PaymentGatewayClient,
    pub samsung: SamsungClient,
    pub switchboard: SwitchboardClient,
    pub speech: SpeechClient,
}

impl IntegrationClients {
    /// Builds one `reqwest::Client` with the configured timeout and hands it to every client
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            payment_gateway: PaymentGatewayClient::new(
                http_client.clone(),
                &config.payment_gateway_url,
                &config.payment_gateway_api_key,
            ),
            samsung: SamsungClient::new(
                http_client.clone(),
                &config.samsung_api_url,
                &config.samsung_api_key,
            ),
            switchboard: SwitchboardClient::new(
                http_client.clone(),
                &config.switchboard_url,
                &config.switchboard_api_key,
            ),
            speech: SpeechClient::new(http_client, &config.speech_api_url, &config.speech_api_key),
        })
    }
}
