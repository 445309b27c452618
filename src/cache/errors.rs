use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Operation error: {0}")]
    OperationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Timed out after {0}ms")]
    Timeout(u64),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("JSON error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl CacheError {
    /// Errors that mean the backend itself is unreachable, as opposed to a
    /// rejected value.
    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            CacheError::ConnectionError(_)
                | CacheError::Timeout(_)
                | CacheError::Unavailable(_)
                | CacheError::RedisError(_)
        )
    }
}
