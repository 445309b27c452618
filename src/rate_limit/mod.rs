//! Per-client sliding window rate limiting with temporary bans.
//!
//! Every client (normally the resolved remote IP) gets a window of request
//! timestamps covering the last `window_size` milliseconds. A client may make
//! exactly `requests_per_minute` requests per window; the next request is
//! rejected and starts a ban lasting `ban_duration` milliseconds. When the ban
//! ends the client starts over with an empty window.
//!
//! # Memory bounds
//!
//! At most `max_clients` windows are tracked. A request from an unknown client
//! while the table is full is rejected without a ban. The periodic sweep drops
//! stale timestamps, expired bans and empty windows, and evicts the least
//! recently active clients if the table is still over the limit.
//!
//! # Example
//!
//! ```rust,ignore
//! use imagehost::rate_limit::structs::rate_limiter::RateLimiter;
//!
//! let limiter = Arc::new(RateLimiter::new(config.rate_limit.clone(), Arc::new(SystemClock)));
//! let _sweeper = limiter.start_sweeper();
//! if !limiter.is_allowed("203.0.113.7") {
//!     // reject
//! }
//! ```

/// Admission decisions.
pub mod enums;

/// Implementation blocks for the limiter.
pub mod impls;

/// Limiter state, ban records and statistics.
pub mod structs;
