use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::server::util::validate;

/// Raw card data sent to the payment gateway; never stored
#[derive(Serialize, Deserialize, ToSchema, Validate, Clone)]
pub struct TokenizeRequest {
    #[validate(custom(function = "validate::card_number"))]
    pub card_number: String,
    #[validate(range(min = 1, max = 12, message = "must be between 1 and 12"))]
    pub expiry_month: i32,
    pub expiry_year: i32,
    #[validate(custom(function = "validate::cvv"))]
    pub cvv: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct TokenizeResponseDto {
    pub token: String,
    pub last_4_digits: String,
}

/// A call logged by the switchboard
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CallRecordDto {
    pub call_id: String,
    /// `inbound` or `outbound`
    pub direction: String,
    pub from: String,
    pub to: String,
    pub started_at: DateTime<Utc>,
    pub duration_seconds: u32,
    pub recording_url: Option<String>,
}

/// Click-to-call: rings `extension` and connects it to `phone_number`
#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct PlaceCallRequest {
    #[validate(length(min = 1, max = 20))]
    pub extension: String,
    #[validate(custom(function = "validate::phone_number"))]
    pub phone_number: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PlacedCallDto {
    pub call_id: String,
    pub status: String,
}

/// Audio to transcribe, forwarded to the speech recognition service
#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct RecognizeRequest {
    /// Base64 encoded audio
    #[validate(length(min = 1))]
    pub audio_content: String,
    /// Audio encoding such as `LINEAR16`, `FLAC` or `MP3`; detected from the header when omitted
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    #[validate(range(min = 8000, max = 48000, message = "must be between 8000 and 48000"))]
    pub sample_rate_hertz: Option<i32>,
    /// BCP-47 language tag, defaults to `he-IL`
    #[serde(default)]
    #[validate(length(min = 2, max = 35))]
    pub language_code: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct TranscriptDto {
    /// Best transcript of every recognized segment, joined by spaces
    pub transcript: String,
    /// Confidence of the first segment's best alternative
    pub confidence: Option<f64>,
    pub language_code: String,
}
