use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitRejection {
    pub error: String,
    pub message: String,
    #[serde(rename = "clientIP")]
    pub client_ip: String,
    pub limit: u32,
    /// Window length in seconds.
    pub window: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ban_remaining_seconds: Option<u64>,
}
