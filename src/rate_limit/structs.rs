//! Rate limiting data structures.

pub mod ban_record;

/// Serializable limiter counters.
pub mod rate_limit_stats;

pub mod rate_limit_stats_atomics;

/// Per-client view used for rejection bodies.
pub mod rate_limit_status;

/// The limiter itself.
pub mod rate_limiter;

/// Windows and bans behind the limiter's mutex.
pub mod rate_limiter_state;

/// Counts returned by a sweep.
pub mod sweep_summary;
