//! Implementation blocks for cache types.

pub mod cache_coordinator;

pub mod cache_key;

pub mod cache_stats_atomics;

pub mod connection_state;

pub mod local_cache;

pub mod redis_connector;

pub mod redis_session;

pub mod remote_cache_client;
