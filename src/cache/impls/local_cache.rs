use std::sync::Arc;
use async_trait::async_trait;
use linked_hash_map::LinkedHashMap;
use log::debug;
use parking_lot::Mutex;
use crate::cache::errors::CacheError;
use crate::cache::structs::local_cache::{LocalCache, LocalCacheEntry};
use crate::cache::traits::cache_backend::CacheBackend;
use crate::common::common::ms_to_secs_ceil;
use crate::common::traits::clock::Clock;

impl LocalCacheEntry {
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires_at
    }
}

impl LocalCache {
    pub fn new(capacity: usize, clock: Arc<dyn Clock>) -> LocalCache {
        LocalCache {
            capacity: capacity.max(1),
            clock,
            entries: Mutex::new(LinkedHashMap::new()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let now = self.clock.now_ms();
        let mut lock = self.entries.lock();
        if lock.get(key)?.is_expired(now) {
            lock.remove(key);
            return None;
        }
        lock.get_refresh(key).map(|entry| entry.value.clone())
    }

    pub fn set(&self, key: &str, value: &str, ttl: u64) -> Result<(), CacheError> {
        if ttl == 0 {
            return Err(CacheError::OperationError(format!("ttl for '{key}' must be positive")));
        }
        let entry = LocalCacheEntry {
            value: value.to_string(),
            expires_at: self.clock.now_ms().saturating_add(ttl.saturating_mul(1000)),
        };
        let mut lock = self.entries.lock();
        lock.remove(key);
        if lock.len() >= self.capacity
            && let Some((evicted, _)) = lock.pop_front() {
                debug!("[CACHE] Local cache full ({}), evicted '{}'", self.capacity, evicted);
            }
        lock.insert(key.to_string(), entry);
        Ok(())
    }

    pub fn delete(&self, key: &str) -> bool {
        let now = self.clock.now_ms();
        let mut lock = self.entries.lock();
        lock.remove(key).is_some_and(|entry| !entry.is_expired(now))
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn ttl(&self, key: &str) -> Option<u64> {
        let now = self.clock.now_ms();
        let mut lock = self.entries.lock();
        let expires_at = lock.get(key)?.expires_at;
        if now >= expires_at {
            lock.remove(key);
            return None;
        }
        Some(ms_to_secs_ceil(expires_at - now))
    }

    /// A `ttl` of 0 removes the entry, matching the remote backend.
    pub fn expire(&self, key: &str, ttl: u64) -> bool {
        let now = self.clock.now_ms();
        let mut lock = self.entries.lock();
        let live = match lock.get(key) {
            None => return false,
            Some(entry) => !entry.is_expired(now),
        };
        if !live || ttl == 0 {
            lock.remove(key);
            return live;
        }
        if let Some(entry) = lock.get_mut(key) {
            entry.expires_at = now.saturating_add(ttl.saturating_mul(1000));
        }
        true
    }

    /// Live entries; expired ones are dropped on the way.
    pub fn len(&self) -> usize {
        self.purge_expired();
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now_ms();
        let mut lock = self.entries.lock();
        let expired: Vec<String> = lock.iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();
        for key in expired.iter() {
            lock.remove(key);
        }
        expired.len()
    }
}

#[async_trait]
impl CacheBackend for LocalCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(LocalCache::get(self, key))
    }

    async fn set(&self, key: &str, value: &str, ttl: u64) -> Result<(), CacheError> {
        LocalCache::set(self, key, value, ttl)
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        Ok(LocalCache::delete(self, key))
    }

    async fn clear(&self) -> Result<(), CacheError> {
        LocalCache::clear(self);
        Ok(())
    }

    async fn ttl(&self, key: &str) -> Result<Option<u64>, CacheError> {
        Ok(LocalCache::ttl(self, key))
    }

    async fn expire(&self, key: &str, ttl: u64) -> Result<bool, CacheError> {
        Ok(LocalCache::expire(self, key, ttl))
    }

    async fn key_count(&self) -> Result<usize, CacheError> {
        Ok(self.len())
    }
}
