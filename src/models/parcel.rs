use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateParcelRequest {
    pub title: String,
    pub parcel_type: String,
    pub sender_name: String,
    pub sender_address: String,
    pub receiver_name: String,
    pub receiver_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    pub cost: i64,
    pub created_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateParcelResponse {
    #[serde(rename = "insertedId")]
    pub inserted_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteParcelResponse {
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MyParcelsQuery {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
