use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::server::error::integration::IntegrationError;

static SERVICE: &str = "Switchboard";

/// Call log entry returned by `GET /calls`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SwitchboardCall {
    pub id: String,
    pub direction: String,
    pub from: String,
    pub to: String,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub recording_url: Option<String>,
}

#[derive(Deserialize)]
struct CallList {
    #[serde(default)]
    calls: Vec<SwitchboardCall>,
}

#[derive(Serialize)]
struct OriginateRequest<'a> {
    extension: &'a str,
    destination: &'a str,
}

/// Answer of `POST /calls`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct OriginatedCall {
    pub id: String,
    pub status: String,
}

/// Client of the telephony switchboard's HTTP API
#[derive(Clone)]
pub struct SwitchboardClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SwitchboardClient {
    pub fn new(http_client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Lists the calls made to or from `phone_number`
    pub async fn list_calls(
        &self,
        phone_number: &str,
    ) -> Result<Vec<SwitchboardCall>, IntegrationError> {
        let url = format!("{}/calls", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .header("x-api-key", &self.api_key)
            .query(&[("phone", phone_number)])
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

        let body: CallList = response
            .json()
            .await
            .map_err(|e| IntegrationError::InvalidResponse {
                service: SERVICE,
                reason: e.to_string(),
            })?;

        Ok(body.calls)
    }

    /// Rings `extension` and connects it to `destination` once answered
    pub async fn originate_call(
        &self,
        extension: &str,
        destination: &str,
    ) -> Result<OriginatedCall, IntegrationError> {
        let url = format!("{}/calls", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&OriginateRequest {
                extension,
                destination,
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

        let call: OriginatedCall =
            response
                .json()
                .await
                .map_err(|e| IntegrationError::InvalidResponse {
                    service: SERVICE,
                    reason: e.to_string(),
                })?;

        tracing::info!(call_id = %call.id, extension = %extension, "Originated switchboard call");

        Ok(call)
    }
}
