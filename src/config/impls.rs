//! Implementation blocks for configuration types.

pub mod api_server_config;

pub mod cache_config;

pub mod configuration;

pub mod configuration_error;

pub mod rate_limit_config;

pub mod redis_config;
