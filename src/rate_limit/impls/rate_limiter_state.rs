use crate::rate_limit::structs::rate_limiter_state::RateLimiterState;

impl RateLimiterState {
    /// Clients holding a slot: those with a window plus those serving a ban.
    pub fn tracked(&self) -> usize {
        self.windows.len() + self.bans.len()
    }
}
