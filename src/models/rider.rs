use serde::{Deserialize, Serialize};

/// Rider onboarding application. The initial status is caller-supplied and
/// stored verbatim; the admin endpoint overwrites it later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiderApplicationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiderApplicationResponse {
    #[serde(rename = "insertedId")]
    pub inserted_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRiderStatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRiderStatusResponse {
    #[serde(rename = "modifiedCount")]
    pub modified_count: u64,
}
