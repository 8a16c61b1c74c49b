use serde::{Deserialize, Serialize};

use crate::{
    model::integration::{TokenizeRequest, TokenizeResponseDto},
    server::error::integration::IntegrationError,
};

static SERVICE: &str = "Payment gateway";

#[derive(Serialize)]
struct GatewayTokenizeRequest<'a> {
    card_number: &'a str,
    expiry_month: i32,
    expiry_year: i32,
    cvv: &'a str,
}

#[derive(Deserialize)]
struct GatewayTokenizeResponse {
    token: String,
    last_4_digits: String,
}

/// Client of the card tokenization gateway
#[derive(Clone)]
pub struct PaymentGatewayClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PaymentGatewayClient {
    pub fn new(http_client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Exchanges card data for a reusable token
    ///
    /// The card number must already be normalized to digits. Card data is only sent to the
    /// gateway and never logged.
    pub async fn tokenize(
        &self,
        card_number: &str,
        request: &TokenizeRequest,
    ) -> Result<TokenizeResponseDto, IntegrationError> {
        let url = format!("{}/tokenize", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&GatewayTokenizeRequest {
                card_number,
                expiry_month: request.expiry_month,
                expiry_year: request.expiry_year,
                cvv: &request.cvv,
            })
            .send()
            .await
            .map_err(|source| IntegrationError::Unreachable {
                service: SERVICE,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IntegrationError::UpstreamStatus {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

        let body: GatewayTokenizeResponse =
            response
                .json()
                .await
                .map_err(|e| IntegrationError::InvalidResponse {
                    service: SERVICE,
                    reason: e.to_string(),
                })?;

        if body.token.is_empty() {
            return Err(IntegrationError::InvalidResponse {
                service: SERVICE,
                reason: "empty token".to_string(),
            });
        }

        tracing::info!(last_4_digits = %body.last_4_digits, "Tokenized payment card");

        Ok(TokenizeResponseDto {
            token: body.token,
            last_4_digits: body.last_4_digits,
        })
    }
}
