use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    /// Attempt the remote cache at all; when off only the local cache is used.
    pub enabled: bool,
    /// Default local TTL in seconds.
    pub ttl: u64,
    /// Default remote TTL in seconds.
    pub redis_ttl: u64,
    /// Milliseconds between sweeps of expired local entries.
    pub map_cleanup_interval: u64,
    pub max_entries: usize,
}
