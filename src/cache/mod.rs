//! Resilient cache layer.
//!
//! Cached values (JSON text) live in a remote Redis database when one is
//! reachable, and in a bounded in-process cache when it is not. Callers only
//! ever talk to the [`CacheCoordinator`](structs::cache_coordinator::CacheCoordinator),
//! which picks the backend per call.
//!
//! # Backends
//!
//! - **LocalCache**: LRU ordered map with per-entry expiry, fixed capacity,
//!   never blocks on I/O
//! - **RemoteCacheClient**: Redis session behind a connection state machine
//!   (`Disconnected`, `Connecting`, `Connected`, `Backoff`)
//!
//! # Failover
//!
//! A connection failure on the remote client drops its session and schedules
//! a retry after `retry_interval * 1.5^(n-1)` milliseconds. Meanwhile every
//! call is answered by the local cache. After `max_retries` failed attempts
//! the client gives up until a manual reconnect. Writes made during a
//! fallback stay local; they are not copied to Redis once it comes back.
//!
//! # Example
//!
//! ```rust,ignore
//! use imagehost::cache::structs::cache_coordinator::CacheCoordinator;
//!
//! let cache = CacheCoordinator::new(config.cache.clone(), &config.redis, Arc::new(SystemClock))?;
//! cache.start().await;
//! let listing: Vec<String> = cache.remember("resource:gallery:index", None, || load()).await?;
//! ```

/// Connection status enumeration.
pub mod enums;

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for cache backends and the coordinator.
pub mod impls;

/// Data structures for cache backends and statistics.
pub mod structs;

/// Cache backend trait definitions.
pub mod traits;
