use crate::common::common::ms_to_secs_ceil;
use crate::config::structs::rate_limit_config::RateLimitConfig;

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window_size: 60_000,
            requests_per_minute: 60,
            max_clients: 10_000,
            cleanup_interval: 60_000,
            ban_duration: 300_000,
        }
    }
}

impl RateLimitConfig {
    pub fn window_secs(&self) -> u64 {
        ms_to_secs_ceil(self.window_size)
    }
}
