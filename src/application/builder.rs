use crate::domain::message::{NexoMessageParams, PaymentDetails, ServiceId};
use crate::domain::nexo::NexoRequest;
use crate::error::Result;
use crate::settings::Settings;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

/// Renders NEXO request parameters into the JSON string the payment SDK consumes.
pub struct MessageBuilder;

impl MessageBuilder {
    /// Builds the `SaleToPOIRequest` envelope for `params`.
    ///
    /// Field values are escaped by the serializer, so the output is valid
    /// JSON whatever they contain. Amount and currency are not validated
    /// here; the SDK rejects what the terminal would not accept.
    pub fn build(params: &NexoMessageParams) -> Result<String> {
        let request = NexoRequest::from(params);
        let json = serde_json::to_string(&request)?;
        debug!(
            category = ?params.category(),
            service_id = %params.service_id,
            poi_id = %params.poi_id,
            "Built NEXO request"
        );
        Ok(json)
    }
}

/// Fills request parameters from the configured sale and terminal ids,
/// generating fresh identifiers and timestamps for every request.
pub struct MessageFactory<'a> {
    settings: &'a Settings,
}

impl<'a> MessageFactory<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    pub fn diagnosis(&self) -> NexoMessageParams {
        NexoMessageParams::diagnosis(
            ServiceId::generate(),
            self.settings.sale_id.as_str(),
            self.settings.poi_id.as_str(),
            Utc::now(),
        )
    }

    /// A payment in `currency`, or the configured currency when `None`.
    pub fn payment(&self, amount: Decimal, currency: Option<&str>) -> NexoMessageParams {
        let details = PaymentDetails {
            transaction_id: Uuid::new_v4().to_string(),
            currency: currency.unwrap_or(self.settings.currency.as_str()).to_string(),
            amount,
        };
        NexoMessageParams::payment(
            ServiceId::generate(),
            self.settings.sale_id.as_str(),
            self.settings.poi_id.as_str(),
            details,
            Utc::now(),
        )
    }
}
