//! Cache data structures.

/// Unified cache front selecting between remote and local backends.
pub mod cache_coordinator;

/// Namespaced cache key builder.
pub mod cache_key;

/// Hit/miss counters.
pub mod cache_stats_atomics;

/// Serializable statistics snapshot.
pub mod cache_stats;

/// Remote backend connection state record.
pub mod connection_state;

/// In-process bounded LRU cache with TTLs.
pub mod local_cache;

/// Redis connector (session factory).
pub mod redis_connector;

/// Redis session bound to one multiplexed connection.
pub mod redis_session;

/// Remote cache client with reconnect/backoff state machine.
pub mod remote_cache_client;
