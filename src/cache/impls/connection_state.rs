use crate::cache::enums::connection_status::ConnectionStatus;
use crate::cache::structs::connection_state::ConnectionState;

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    /// Out of retries and no timer pending; only a manual reconnect leaves this.
    pub fn is_exhausted(&self, max_retries: u32) -> bool {
        self.status == ConnectionStatus::Backoff
            && self.next_retry_at.is_none()
            && self.retry_count >= max_retries
    }
}

/// Delay before retry number `retry_count` (1-based): `base * 1.5^(retry_count - 1)`.
pub fn backoff_delay(base_ms: u64, retry_count: u32) -> u64 {
    let exponent = retry_count.saturating_sub(1).min(64) as i32;
    (base_ms as f64 * 1.5f64.powi(exponent)).round() as u64
}
