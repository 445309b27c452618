use std::sync::atomic::Ordering;
use crate::cache::structs::cache_stats_atomics::CacheStatsAtomics;

impl CacheStatsAtomics {
    pub fn record(&self, hit: bool) {
        if hit {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
    }
}
