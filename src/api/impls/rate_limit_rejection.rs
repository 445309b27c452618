use crate::api::structs::rate_limit_rejection::RateLimitRejection;
use crate::config::structs::rate_limit_config::RateLimitConfig;
use crate::rate_limit::enums::rate_limit_decision::RateLimitDecision;
use crate::rate_limit::structs::rate_limit_status::RateLimitStatus;

impl RateLimitRejection {
    pub fn new(client_ip: &str, decision: RateLimitDecision, status: &RateLimitStatus, config: &RateLimitConfig) -> RateLimitRejection {
        RateLimitRejection {
            error: decision.status_code().canonical_reason().unwrap_or("Rejected").to_string(),
            message: decision.message().to_string(),
            client_ip: client_ip.to_string(),
            limit: config.requests_per_minute,
            window: config.window_secs(),
            remaining: status.remaining,
            reset: status.reset_seconds,
            ban_remaining_seconds: status.ban_remaining_seconds,
        }
    }

    /// Seconds a client should wait before trying again.
    pub fn retry_after(&self) -> Option<u64> {
        self.ban_remaining_seconds.or(self.reset)
    }
}
