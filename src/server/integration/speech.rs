use serde::{Deserialize, Serialize};

use crate::server::error::integration::IntegrationError;

static SERVICE: &str = "Speech-to-Text";

/// Recognition settings of a `speech:recognize` call
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate_hertz: Option<i32>,
    pub language_code: &'a str,
}

#[derive(Serialize)]
struct RecognitionAudio<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct RecognizeBody<'a> {
    config: RecognitionConfig<'a>,
    audio: RecognitionAudio<'a>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SpeechAlternative {
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// One sequential segment of the audio with its alternatives, most likely first
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SpeechResult {
    #[serde(default)]
    pub alternatives: Vec<SpeechAlternative>,
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<SpeechResult>,
}

/// Client of Google Cloud Speech-to-Text's synchronous recognition
#[derive(Clone)]
pub struct SpeechClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SpeechClient {
    pub fn new(http_client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Transcribes base64 encoded audio with `POST /v1/speech:recognize`
    ///
    /// Audio without recognizable speech yields no results rather than an error.
    pub async fn recognize(
        &self,
        config: RecognitionConfig<'_>,
        audio_content: &str,
    ) -> Result<Vec<SpeechResult>, IntegrationError> {
        let url = format!("{}/v1/speech:recognize", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&RecognizeBody {
                config,
                audio: RecognitionAudio {
                    content: audio_content,
                },
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

        let body: RecognizeResponse =
            response
                .json()
                .await
                .map_err(|e| IntegrationError::InvalidResponse {
                    service: SERVICE,
                    reason: e.to_string(),
                })?;

        tracing::debug!(segments = body.results.len(), "Recognized speech");

        Ok(body.results)
    }
}
