use reqwest::StatusCode;
use serde::Deserialize;

use crate::server::error::integration::IntegrationError;

static SERVICE: &str = "Samsung device management";

/// Device record returned by `GET /devices/{imei}`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SamsungDevice {
    pub imei: String,
    pub status: String,
    #[serde(default)]
    pub enrolled: bool,
    #[serde(default)]
    pub last_seen: Option<String>,
}

/// Client of Samsung's device management API
#[derive(Clone)]
pub struct SamsungClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SamsungClient {
    pub fn new(http_client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Looks up the management status of a device by IMEI
    ///
    /// # Returns
    /// - `Ok(SamsungDevice)` - Device known to Samsung
    /// - `Err(IntegrationError::UnknownImei)` - Samsung answered 404
    /// - `Err(IntegrationError::*)` - Any other failure, answered with 502
    pub async fn get_device(&self, imei: &str) -> Result<SamsungDevice, IntegrationError> {
        let url = format!("{}/devices/{}", self.base_url, imei);

        tracing::debug!(imei = %imei, "Querying Samsung device status");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|source| IntegrationError::Unreachable {
                service: SERVICE,
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(IntegrationError::UnknownImei(imei.to_string()));
        }
        if !status.is_success() {
            return Err(IntegrationError::UpstreamStatus {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| IntegrationError::InvalidResponse {
                service: SERVICE,
                reason: e.to_string(),
            })
    }
}
