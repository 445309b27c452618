use crate::config::structs::cache_config::CacheConfig;

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: 3600,
            redis_ttl: 86400,
            map_cleanup_interval: 300_000,
            max_entries: 1000,
        }
    }
}
