//! Wire shape of a NEXO `SaleToPOIRequest` in its JSON encoding.
//!
//! Only the fields the terminal needs for a host diagnosis or a plain
//! payment are modelled.

use super::message::{
    MessageBody, MessageCategory, NexoMessageParams, PaymentDetails, ServiceId, format_timestamp,
};
use rust_decimal::Decimal;
use serde::Serialize;

pub const PROTOCOL_VERSION: &str = "3.0";

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub enum MessageClass {
    Service,
}

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub enum MessageType {
    Request,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct NexoRequest {
    #[serde(rename = "SaleToPOIRequest")]
    pub sale_to_poi_request: SaleToPoiRequest,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct SaleToPoiRequest {
    pub message_header: MessageHeader,
    #[serde(flatten)]
    pub body: RequestBody,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct MessageHeader {
    pub protocol_version: &'static str,
    pub message_class: MessageClass,
    pub message_category: MessageCategory,
    pub message_type: MessageType,
    #[serde(rename = "ServiceID")]
    pub service_id: ServiceId,
    #[serde(rename = "SaleID")]
    pub sale_id: String,
    #[serde(rename = "POIID")]
    pub poi_id: String,
}

/// Serialized as a single key named after the variant.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub enum RequestBody {
    DiagnosisRequest(DiagnosisRequest),
    PaymentRequest(PaymentRequest),
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct DiagnosisRequest {
    pub host_diagnosis_flag: bool,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentRequest {
    pub sale_data: SaleData,
    pub payment_transaction: PaymentTransaction,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct SaleData {
    #[serde(rename = "SaleTransactionID")]
    pub sale_transaction_id: SaleTransactionId,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct SaleTransactionId {
    #[serde(rename = "TransactionID")]
    pub transaction_id: String,
    #[serde(rename = "TimeStamp")]
    pub time_stamp: String,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentTransaction {
    pub amounts_req: AmountsReq,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct AmountsReq {
    pub currency: String,
    /// Emitted as a bare JSON number with the decimal's own scale.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub requested_amount: Decimal,
}

impl From<&NexoMessageParams> for NexoRequest {
    fn from(params: &NexoMessageParams) -> Self {
        let message_header = MessageHeader {
            protocol_version: PROTOCOL_VERSION,
            message_class: MessageClass::Service,
            message_category: params.category(),
            message_type: MessageType::Request,
            service_id: params.service_id.clone(),
            sale_id: params.sale_id.clone(),
            poi_id: params.poi_id.clone(),
        };

        let body = match &params.body {
            MessageBody::Diagnosis => RequestBody::DiagnosisRequest(DiagnosisRequest {
                host_diagnosis_flag: true,
            }),
            MessageBody::Payment(details) => {
                RequestBody::PaymentRequest(payment_request(details, params))
            }
        };

        Self {
            sale_to_poi_request: SaleToPoiRequest {
                message_header,
                body,
            },
        }
    }
}

fn payment_request(details: &PaymentDetails, params: &NexoMessageParams) -> PaymentRequest {
    PaymentRequest {
        sale_data: SaleData {
            sale_transaction_id: SaleTransactionId {
                transaction_id: details.transaction_id.clone(),
                time_stamp: format_timestamp(&params.timestamp),
            },
        },
        payment_transaction: PaymentTransaction {
            amounts_req: AmountsReq {
                currency: details.currency.clone(),
                requested_amount: details.amount,
            },
        },
    }
}
