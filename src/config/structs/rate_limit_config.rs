use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RateLimitConfig {
    pub enabled: bool,
    /// Sliding window length in milliseconds.
    pub window_size: u64,
    /// Requests admitted per window before a ban is issued.
    pub requests_per_minute: u32,
    pub max_clients: usize,
    /// Milliseconds between sweeps.
    pub cleanup_interval: u64,
    /// Ban length in milliseconds.
    pub ban_duration: u64,
}
