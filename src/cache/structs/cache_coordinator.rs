use std::sync::Arc;
use parking_lot::Mutex;
use crate::cache::structs::cache_stats_atomics::CacheStatsAtomics;
use crate::cache::structs::local_cache::LocalCache;
use crate::cache::structs::remote_cache_client::RemoteCacheClient;
use crate::common::structs::scheduled_task::ScheduledTask;
use crate::config::structs::cache_config::CacheConfig;

/// Single entry point for cache reads and writes.
///
/// Prefers the remote backend while it reports connected and falls back to
/// the local cache otherwise. Nothing written during a fallback is replayed
/// to the remote backend later.
pub struct CacheCoordinator {
    pub(crate) config: CacheConfig,
    pub(crate) local: Arc<LocalCache>,
    pub(crate) remote: Option<RemoteCacheClient>,
    pub(crate) stats: Arc<CacheStatsAtomics>,
    pub(crate) cleanup_task: Mutex<Option<ScheduledTask>>,
}
