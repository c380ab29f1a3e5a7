use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackingEventRequest {
    pub tracking_id: String,
    pub parcel_id: i32,
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackingEventResponse {
    pub success: bool,
    #[serde(rename = "insertedId")]
    pub inserted_id: i32,
}
