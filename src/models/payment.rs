use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::entities::payments;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentRequest {
    pub parcel_id: i32,
    pub email: String,
    pub amount: i64,
    pub payment_method: String,
    pub transaction_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentResponse {
    pub message: String,
    pub inserted_id: i32,
}

/// Wire shape of a stored payment. The source stored the reference fields in
/// camelCase and the timestamps in snake_case; kept as-is for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: i32,
    #[serde(rename = "parcelId")]
    pub parcel_id: i32,
    pub email: String,
    pub amount: i64,
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
    pub paid_at: DateTime<FixedOffset>,
    pub paid_at_string: String,
}

impl From<payments::Model> for PaymentRecord {
    fn from(model: payments::Model) -> Self {
        Self {
            id: model.id,
            parcel_id: model.parcel_id,
            email: model.email,
            amount: model.amount,
            payment_method: model.payment_method,
            transaction_id: model.transaction_id,
            paid_at: model.paid_at,
            paid_at_string: model.paid_at_string,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListPaymentsQuery {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    pub amount_in_cents: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    pub client_secret: String,
}
