use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Longest `ServiceID` a terminal accepts.
pub const SERVICE_ID_MAX_LEN: usize = 10;

/// Identifier of a single NEXO exchange.
///
/// Always at most [`SERVICE_ID_MAX_LEN`] characters: longer input is
/// truncated on construction, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceId(String);

impl ServiceId {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().chars().take(SERVICE_ID_MAX_LEN).collect())
    }

    /// A fresh id taken from the leading hex digits of a random UUID.
    pub fn generate() -> Self {
        Self::new(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ServiceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ServiceId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MessageCategory {
    Diagnosis,
    Payment,
}

/// Fields only a payment request carries.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDetails {
    pub transaction_id: String,
    /// ISO 4217 code, passed through unchecked.
    pub currency: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    Diagnosis,
    Payment(PaymentDetails),
}

/// Everything needed to render one NEXO request.
#[derive(Debug, Clone, PartialEq)]
pub struct NexoMessageParams {
    pub service_id: ServiceId,
    pub sale_id: String,
    pub poi_id: String,
    pub body: MessageBody,
    pub timestamp: DateTime<Utc>,
}

impl NexoMessageParams {
    pub fn diagnosis(
        service_id: impl Into<ServiceId>,
        sale_id: impl Into<String>,
        poi_id: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            sale_id: sale_id.into(),
            poi_id: poi_id.into(),
            body: MessageBody::Diagnosis,
            timestamp,
        }
    }

    pub fn payment(
        service_id: impl Into<ServiceId>,
        sale_id: impl Into<String>,
        poi_id: impl Into<String>,
        details: PaymentDetails,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            sale_id: sale_id.into(),
            poi_id: poi_id.into(),
            body: MessageBody::Payment(details),
            timestamp,
        }
    }

    pub fn category(&self) -> MessageCategory {
        match self.body {
            MessageBody::Diagnosis => MessageCategory::Diagnosis,
            MessageBody::Payment(_) => MessageCategory::Payment,
        }
    }
}

/// Renders a UTC instant the way NEXO expects it: `2026-10-19T08:30:00.000Z`.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
