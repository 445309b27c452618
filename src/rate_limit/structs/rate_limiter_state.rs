use std::collections::VecDeque;
use ahash::AHashMap;
use crate::rate_limit::structs::ban_record::BanRecord;

#[derive(Debug, Default)]
pub struct RateLimiterState {
    /// Request times (ms) per client, oldest first.
    pub windows: AHashMap<String, VecDeque<u64>>,
    pub bans: AHashMap<String, BanRecord>,
}
