use chrono::Datelike;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        device::SamsungStatusDto,
        integration::{
            CallRecordDto, PlaceCallRequest, PlacedCallDto, RecognizeRequest, TokenizeRequest,
            TokenizeResponseDto, TranscriptDto,
        },
    },
    server::{
        data::{customer::CustomerRepository, device::DeviceRepository},
        error::{record::RecordError, validation::ValidationError, Error},
        integration::{speech::RecognitionConfig, IntegrationClients},
        util::{time::now, validate},
    },
};

/// Language recognized when a request names none
pub const DEFAULT_LANGUAGE_CODE: &str = "he-IL";

pub struct IntegrationService<'a> {
    db: &'a DatabaseConnection,
    clients: &'a IntegrationClients,
}

impl<'a> IntegrationService<'a> {
    /// Creates a new instance of [`IntegrationService`]
    pub fn new(db: &'a DatabaseConnection, clients: &'a IntegrationClients) -> Self {
        Self { db, clients }
    }

    /// Exchanges a card for a gateway token
    ///
    /// The card is checked locally first so malformed cards never reach the gateway.
    ///
    /// # Returns
    /// - `Ok(TokenizeResponseDto)` - Token and last four digits to store as credit details
    /// - `Err(Error::ValidationError)` - Card number, expiry or CVV invalid
    /// - `Err(Error::IntegrationError)` - Gateway unreachable or rejected the request
    pub async fn tokenize(&self, request: TokenizeRequest) -> Result<TokenizeResponseDto, Error> {
        let request = TokenizeRequest {
            card_number: validate::normalize_card_number(&request.card_number),
            cvv: validate::trimmed(&request.cvv),
            ..request
        };
        validate::check(&request)?;

        let today = now().date();
        if (request.expiry_year, request.expiry_month) < (today.year(), today.month() as i32) {
            return Err(ValidationError::invalid("expiry_year", "card has expired").into());
        }

        Ok(self
            .clients
            .payment_gateway
            .tokenize(&request.card_number, &request)
            .await?)
    }

    /// Looks up a stored device at Samsung by its IMEI
    ///
    /// # Returns
    /// - `Ok(SamsungStatusDto)` - Management status reported by Samsung
    /// - `Err(Error::RecordError)` - Device not found
    /// - `Err(Error::IntegrationError::UnknownImei)` - Samsung does not know the IMEI
    /// - `Err(Error::IntegrationError)` - Samsung unreachable or answered with an error
    pub async fn samsung_status(&self, device_id: i32) -> Result<SamsungStatusDto, Error> {
        let device = DeviceRepository::new(self.db)
            .get(device_id)
            .await?
            .ok_or(RecordError::not_found("Device", device_id))?;

        let status = self.clients.samsung.get_device(&device.imei).await?;

        Ok(SamsungStatusDto {
            device_id: device.id,
            imei: device.imei,
            status: status.status,
            enrolled: status.enrolled,
            last_seen: status.last_seen,
        })
    }

    /// Collects the switchboard's call log for both of a customer's phone numbers
    ///
    /// Calls are returned newest first, each call once even when it involves both numbers.
    ///
    /// # Returns
    /// - `Ok(Vec<CallRecordDto>)` - Calls to or from the customer
    /// - `Err(Error::RecordError)` - Customer not found
    /// - `Err(Error::IntegrationError)` - Switchboard unreachable or answered with an error
    pub async fn customer_calls(&self, customer_id: i32) -> Result<Vec<CallRecordDto>, Error> {
        let customer = CustomerRepository::new(self.db)
            .get(customer_id)
            .await?
            .ok_or(RecordError::not_found("Customer", customer_id))?;

        let mut calls = self
            .clients
            .switchboard
            .list_calls(&customer.phone_number)
            .await?;
        if let Some(additional_phone) = customer.additional_phone.as_deref() {
            calls.extend(self.clients.switchboard.list_calls(additional_phone).await?);
        }

        calls.sort_by(|a, b| b.started_at.cmp(&a.started_at).then(a.id.cmp(&b.id)));
        calls.dedup_by(|a, b| a.id == b.id);

        Ok(calls
            .into_iter()
            .map(|call| CallRecordDto {
                call_id: call.id,
                direction: call.direction,
                from: call.from,
                to: call.to,
                started_at: call.started_at,
                duration_seconds: call.duration,
                recording_url: call.recording_url,
            })
            .collect())
    }

    /// Rings an agent's extension and connects it to a phone number
    ///
    /// # Returns
    /// - `Ok(PlacedCallDto)` - Switchboard call ID and its initial status
    /// - `Err(Error::ValidationError)` - Extension or phone number invalid
    /// - `Err(Error::IntegrationError)` - Switchboard unreachable or refused the call
    pub async fn place_call(&self, request: PlaceCallRequest) -> Result<PlacedCallDto, Error> {
        let request = PlaceCallRequest {
            extension: validate::trimmed(&request.extension),
            phone_number: validate::normalize_phone_number(&request.phone_number),
        };
        validate::check(&request)?;

        let call = self
            .clients
            .switchboard
            .originate_call(&request.extension, &request.phone_number)
            .await?;

        Ok(PlacedCallDto {
            call_id: call.id,
            status: call.status,
        })
    }

    /// Transcribes audio with the speech recognition service
    ///
    /// The best alternative of every recognized segment is joined into one transcript;
    /// silence yields an empty transcript.
    ///
    /// # Returns
    /// - `Ok(TranscriptDto)` - Transcript and the first segment's confidence
    /// - `Err(Error::ValidationError)` - Missing audio or invalid settings
    /// - `Err(Error::IntegrationError)` - Service unreachable or rejected the audio
    pub async fn recognize(&self, request: RecognizeRequest) -> Result<TranscriptDto, Error> {
        let request = RecognizeRequest {
            audio_content: validate::trimmed(&request.audio_content),
            encoding: validate::optional_text(request.encoding.as_deref())
                .map(|encoding| encoding.to_uppercase()),
            language_code: validate::optional_text(request.language_code.as_deref()),
            ..request
        };
        validate::check(&request)?;

        let language_code = request
            .language_code
            .unwrap_or_else(|| DEFAULT_LANGUAGE_CODE.to_string());

        let results = self
            .clients
            .speech
            .recognize(
                RecognitionConfig {
                    encoding: request.encoding.as_deref(),
                    sample_rate_hertz: request.sample_rate_hertz,
                    language_code: &language_code,
                },
                &request.audio_content,
            )
            .await?;

        let best: Vec<_> = results
            .iter()
            .filter_map(|result| result.alternatives.first())
            .collect();

        Ok(TranscriptDto {
            transcript: best
                .iter()
                .map(|alternative| alternative.transcript.trim())
                .filter(|transcript| !transcript.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
            confidence: best.first().and_then(|alternative| alternative.confidence),
            language_code,
        })
    }
}
