use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct RedisReconnectConfig {
    #[serde(alias = "maxRetries")]
    pub max_retries: u32,
    /// Base delay in milliseconds, multiplied by 1.5 per consecutive failure.
    #[serde(alias = "retryInterval")]
    pub retry_interval: u64,
    /// Milliseconds allowed for a single connection attempt.
    #[serde(alias = "connectTimeout")]
    pub connect_timeout: u64,
}
