//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Admin/cache API server configuration.
pub mod api_server_config;

/// Cache coordinator configuration (local cache and default TTLs).
pub mod cache_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Sliding-window rate limiter configuration.
pub mod rate_limit_config;

/// Remote cache connection configuration.
pub mod redis_config;

/// Remote cache reconnect/backoff policy.
pub mod redis_reconnect_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
