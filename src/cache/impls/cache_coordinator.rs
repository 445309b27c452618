use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use log::{debug, info, warn};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_coordinator::CacheCoordinator;
use crate::cache::structs::cache_stats::CacheStats;
use crate::cache::structs::cache_stats_atomics::CacheStatsAtomics;
use crate::cache::structs::local_cache::LocalCache;
use crate::cache::structs::redis_connector::RedisConnector;
use crate::cache::structs::remote_cache_client::RemoteCacheClient;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::common::structs::scheduled_task::ScheduledTask;
use crate::common::traits::clock::Clock;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::redis_config::RedisConfig;

impl CacheCoordinator {
    /// Builds the local cache and, when `cache.enabled`, a Redis client.
    /// Nothing connects until [`CacheCoordinator::start`].
    pub fn new(config: CacheConfig, redis: &RedisConfig, clock: Arc<dyn Clock>) -> Result<CacheCoordinator, CacheError> {
        let remote = if config.enabled {
            let connector = RedisConnector::new(redis)?;
            Some(RemoteCacheClient::new(Arc::new(connector), redis.reconnect, clock.clone()))
        } else {
            None
        };
        let local = Arc::new(LocalCache::new(config.max_entries, clock));
        Ok(Self::with_backends(config, local, remote))
    }

    pub fn with_backends(config: CacheConfig, local: Arc<LocalCache>, remote: Option<RemoteCacheClient>) -> CacheCoordinator {
        CacheCoordinator {
            config,
            local,
            remote,
            stats: Arc::new(CacheStatsAtomics::default()),
            cleanup_task: Mutex::new(None),
        }
    }

    /// First connect attempt plus the periodic purge of expired local entries.
    pub async fn start(&self) {
        match &self.remote {
            None => info!("[CACHE] Remote cache disabled, using local cache only"),
            Some(remote) => {
                if !remote.connect().await {
                    warn!("[CACHE] Remote cache unavailable at boot, serving from local cache");
                }
            }
        }

        let local = self.local.clone();
        let period = Duration::from_millis(self.config.map_cleanup_interval);
        let task = ScheduledTask::interval("local_cache_cleanup", period, move || {
            let local = local.clone();
            async move {
                let purged = local.purge_expired();
                if purged > 0 {
                    debug!("[CACHE] Purged {} expired local entries", purged);
                }
            }
        });
        let previous = self.cleanup_task.lock().replace(task);
        drop(previous);
        info!("[CACHE] Local cleanup every {}ms", self.config.map_cleanup_interval);
    }

    pub fn local(&self) -> &Arc<LocalCache> {
        &self.local
    }

    pub fn remote(&self) -> Option<&RemoteCacheClient> {
        self.remote.as_ref()
    }

    pub fn backend_connected(&self) -> bool {
        self.connected_remote().is_some()
    }

    pub async fn get_raw(&self, key: &str) -> Option<String> {
        if let Some(remote) = self.connected_remote() {
            match remote.get(key).await {
                Ok(value) => {
                    self.stats.record(value.is_some());
                    return value;
                }
                Err(error) => debug!("[CACHE] Remote get '{}' failed, using local: {}", key, error),
            }
        }
        let value = self.local.get(key);
        self.stats.record(value.is_some());
        value
    }

    /// `ttl` of `None` or 0 means the configured default for whichever
    /// backend takes the write.
    pub async fn set_raw(&self, key: &str, value: &str, ttl: Option<u64>) -> Result<(), CacheError> {
        if let Some(remote) = self.connected_remote() {
            match remote.set(key, value, self.remote_ttl(ttl)).await {
                Ok(()) => return Ok(()),
                Err(error) => debug!("[CACHE] Remote set '{}' failed, using local: {}", key, error),
            }
        }
        self.local.set(key, value, self.local_ttl(ttl))
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.get_raw(key).await {
            None => Ok(None),
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        }
    }

    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl: Option<u64>) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw, ttl).await
    }

    /// Removes the key from both backends so a fallback copy cannot
    /// resurface after the remote goes away.
    pub async fn delete(&self, key: &str) -> bool {
        let mut removed = false;
        if let Some(remote) = self.connected_remote() {
            match remote.delete(key).await {
                Ok(existed) => removed = existed,
                Err(error) => debug!("[CACHE] Remote delete '{}' failed: {}", key, error),
            }
        }
        self.local.delete(key) || removed
    }

    /// Always clears the local cache, and the remote one while connected.
    /// Safe to repeat.
    pub async fn clear(&self) {
        if let Some(remote) = self.connected_remote()
            && let Err(error) = remote.clear().await {
                warn!("[CACHE] Remote clear failed: {}", error);
            }
        self.local.clear();
        info!("[CACHE] Cleared");
    }

    pub async fn ttl(&self, key: &str) -> Option<u64> {
        if let Some(remote) = self.connected_remote() {
            match remote.ttl(key).await {
                Ok(ttl) => return ttl,
                Err(error) => debug!("[CACHE] Remote ttl '{}' failed, using local: {}", key, error),
            }
        }
        self.local.ttl(key)
    }

    pub async fn expire(&self, key: &str, seconds: u64) -> bool {
        if let Some(remote) = self.connected_remote() {
            match remote.expire(key, seconds).await {
                Ok(existed) => return existed,
                Err(error) => debug!("[CACHE] Remote expire '{}' failed, using local: {}", key, error),
            }
        }
        self.local.expire(key, seconds)
    }

    /// Read-through: the cached value when present, otherwise whatever
    /// `loader` produces, stored before it is returned.
    ///
    /// A cached value that no longer decodes as `T` is treated as a miss.
    pub async fn remember<T, F, Fut>(&self, key: &str, ttl: Option<u64>, loader: F) -> Result<T, CacheError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, CacheError>>,
    {
        match self.get::<T>(key).await {
            Ok(Some(value)) => return Ok(value),
            Ok(None) => {}
            Err(error) => warn!("[CACHE] Discarding undecodable value for '{}': {}", key, error),
        }
        let value = loader().await?;
        self.set(key, &value, ttl).await?;
        Ok(value)
    }

    pub async fn stats(&self) -> CacheStats {
        let hits = self.stats.hits.load(Ordering::Relaxed);
        let misses = self.stats.misses.load(Ordering::Relaxed);
        let lookups = hits + misses;
        let hit_rate = if lookups == 0 { 0.0 } else { hits as f64 / lookups as f64 };

        let mut keys = None;
        if let Some(remote) = self.connected_remote() {
            match remote.key_count().await {
                Ok(count) => keys = Some(count),
                Err(error) => debug!("[CACHE] Remote key count failed, using local: {}", error),
            }
        }

        CacheStats {
            hits,
            misses,
            hit_rate,
            keys: keys.unwrap_or_else(|| self.local.len()),
            backend_connected: self.backend_connected(),
            retry_count: self.remote.as_ref().map(|remote| remote.retry_count()).unwrap_or(0),
        }
    }

    pub fn reset_retry_count(&self) {
        if let Some(remote) = &self.remote {
            remote.reset_retry_count();
        }
    }

    /// `false` when remote caching is disabled or the attempt failed.
    pub async fn manual_reconnect(&self) -> bool {
        match &self.remote {
            None => false,
            Some(remote) => remote.manual_reconnect().await,
        }
    }

    pub async fn close(&self) {
        let cleanup = self.cleanup_task.lock().take();
        drop(cleanup);
        if let Some(remote) = &self.remote {
            remote.close().await;
        }
        info!("[CACHE] Closed");
    }

    fn connected_remote(&self) -> Option<&RemoteCacheClient> {
        self.remote.as_ref().filter(|remote| remote.is_connected())
    }

    fn remote_ttl(&self, ttl: Option<u64>) -> u64 {
        ttl.filter(|ttl| *ttl > 0).unwrap_or(self.config.redis_ttl)
    }

    fn local_ttl(&self, ttl: Option<u64>) -> u64 {
        ttl.filter(|ttl| *ttl > 0).unwrap_or(self.config.ttl)
    }
}
