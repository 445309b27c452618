use std::sync::Arc;
use async_trait::async_trait;
use log::debug;
use crate::cache::errors::CacheError;
use crate::cache::structs::redis_connector::RedisConnector;
use crate::cache::structs::redis_session::RedisSession;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::cache::traits::remote_connector::RemoteConnector;
use crate::config::structs::redis_config::RedisConfig;

impl RedisConnector {
    pub fn new(config: &RedisConfig) -> Result<Self, CacheError> {
        let client = redis::Client::open(config.connection_url())
            .map_err(|e| CacheError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        Ok(Self {
            client,
            address: config.display_address(),
        })
    }
}

#[async_trait]
impl RemoteConnector for RedisConnector {
    async fn connect(&self) -> Result<Arc<dyn CacheBackend>, CacheError> {
        let mut connection = self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        redis::cmd("PING")
            .query_async::<String>(&mut connection)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[REDIS] Session opened to {}", self.address);
        Ok(Arc::new(RedisSession { connection }))
    }

    fn describe(&self) -> String {
        self.address.clone()
    }
}
