use std::sync::Arc;
use parking_lot::Mutex;
use crate::common::traits::clock::Clock;
use crate::config::structs::rate_limit_config::RateLimitConfig;
use crate::rate_limit::structs::rate_limit_stats_atomics::RateLimitStatsAtomics;
use crate::rate_limit::structs::rate_limiter_state::RateLimiterState;

/// Sliding-window limiter keyed by client.
///
/// `max_clients` bounds windows and active bans together, so spreading
/// requests over many addresses cannot grow either table past it.
#[derive(Debug)]
pub struct RateLimiter {
    pub(crate) config: RateLimitConfig,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) state: Mutex<RateLimiterState>,
    pub(crate) stats: RateLimitStatsAtomics,
}
