use std::sync::Arc;
use async_trait::async_trait;
use crate::cache::errors::CacheError;
use crate::cache::traits::cache_backend::CacheBackend;

/// Opens sessions against a remote cache service.
///
/// The remote client owns retry and timeout policy; a connector only knows
/// how to perform one attempt.
#[async_trait]
pub trait RemoteConnector: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn CacheBackend>, CacheError>;

    /// Human readable target for log lines.
    fn describe(&self) -> String;
}
