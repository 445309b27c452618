//! Shared data context for API request handlers.

use std::sync::Arc;
use crate::cache::structs::cache_coordinator::CacheCoordinator;
use crate::config::structs::configuration::Configuration;
use crate::rate_limit::structs::rate_limiter::RateLimiter;

/// Shared application data available to all API request handlers.
///
/// Built once in `main` and injected into Actix-web's application data; every
/// worker thread sees the same coordinator and limiter.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(data: Data<Arc<ApiServiceData>>) -> HttpResponse {
///     let stats = data.cache.stats().await;
///     // ...
/// }
/// ```
pub struct ApiServiceData {
    pub cache: Arc<CacheCoordinator>,
    pub rate_limiter: Arc<RateLimiter>,
    pub config: Arc<Configuration>,
}
