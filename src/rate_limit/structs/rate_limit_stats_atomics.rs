use std::sync::atomic::AtomicU64;

#[derive(Debug, Default)]
pub struct RateLimitStatsAtomics {
    pub allowed: AtomicU64,
    pub rejected: AtomicU64,
    pub bans_issued: AtomicU64,
}
