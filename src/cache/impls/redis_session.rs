use async_trait::async_trait;
use log::debug;
use redis::AsyncCommands;
use crate::cache::errors::CacheError;
use crate::cache::structs::redis_session::RedisSession;
use crate::cache::traits::cache_backend::CacheBackend;

#[async_trait]
impl CacheBackend for RedisSession {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection.clone();
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(CacheError::RedisError)
    }

    async fn set(&self, key: &str, value: &str, ttl: u64) -> Result<(), CacheError> {
        if ttl == 0 {
            return Err(CacheError::OperationError(format!("ttl for '{key}' must be positive")));
        }
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[REDIS] Set {} ttl={}", key, ttl);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.connection.clone();
        let removed = conn.del::<_, i64>(key)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(removed > 0)
    }

    async fn clear(&self) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("FLUSHDB")
            .query_async::<()>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[REDIS] Flushed database");
        Ok(())
    }

    async fn ttl(&self, key: &str) -> Result<Option<u64>, CacheError> {
        let mut conn = self.connection.clone();
        let remaining = conn.ttl::<_, i64>(key)
            .await
            .map_err(CacheError::RedisError)?;
        // -2 for a missing key, -1 for a key without expiry
        if remaining < 0 {
            return Ok(None);
        }
        Ok(Some(remaining as u64))
    }

    async fn expire(&self, key: &str, ttl: u64) -> Result<bool, CacheError> {
        if ttl == 0 {
            return self.delete(key).await;
        }
        let mut conn = self.connection.clone();
        let updated = conn.expire::<_, i64>(key, ttl as i64)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(updated > 0)
    }

    async fn key_count(&self) -> Result<usize, CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("DBSIZE")
            .query_async::<usize>(&mut conn)
            .await
            .map_err(CacheError::RedisError)
    }
}
