use serde::{Deserialize, Serialize};
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::rate_limit_config::RateLimitConfig;
use crate::config::structs::redis_config::RedisConfig;
use crate::config::structs::sentry_config::SentryConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    /// Seconds between console statistics lines, 0 disables them.
    #[serde(default)]
    pub log_console_interval: u64,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub redis: RedisConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub api_server: ApiServerConfig,
    #[serde(default)]
    pub sentry_config: SentryConfig,
    #[serde(skip)]
    pub(crate) warnings: Vec<String>,
}
