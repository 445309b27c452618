use async_trait::async_trait;
use crate::cache::errors::CacheError;

/// Operations every cache backend provides.
///
/// Values are stored as text (the JSON form of the cached payload). TTLs are
/// in whole seconds and must be positive; an entry whose TTL has elapsed is
/// reported as absent by every implementation.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: &str, ttl: u64) -> Result<(), CacheError>;

    /// Returns whether the key existed.
    async fn delete(&self, key: &str) -> Result<bool, CacheError>;

    async fn clear(&self) -> Result<(), CacheError>;

    /// Remaining lifetime in seconds, `None` when the key is absent.
    async fn ttl(&self, key: &str) -> Result<Option<u64>, CacheError>;

    /// Sets a new lifetime. Returns whether the key existed.
    async fn expire(&self, key: &str, ttl: u64) -> Result<bool, CacheError>;

    async fn key_count(&self) -> Result<usize, CacheError>;

    async fn close(&self) -> Result<(), CacheError> {
        Ok(())
    }
}
