//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! the cache, rate limiting and API modules.
//!
//! # Utilities
//!
//! - Logging setup (`fern` dispatcher with colored levels)
//! - Millisecond wall clock helpers
//! - A time source abstraction so windows, bans and TTLs can be driven
//!   deterministically in tests
//! - Cancellable background tasks for timers and periodic sweeps
//!
//! # Data Structures
//!
//! - `CustomError` - Boot-level error type
//! - `SystemClock` / `ManualClock` - `Clock` implementations
//! - `ScheduledTask` - Handle to a one-shot or periodic tokio task
//!
//! # Example
//!
//! ```rust,ignore
//! use imagehost::common::common::current_time_ms;
//! use imagehost::common::structs::scheduled_task::ScheduledTask;
//!
//! let now = current_time_ms();
//! let mut task = ScheduledTask::interval("sweeper", Duration::from_secs(60), || async {
//!     // periodic maintenance...
//! });
//! task.cancel();
//! ```

/// Common data structures (errors, clocks, scheduled tasks).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Trait definitions shared across modules.
pub mod traits;
