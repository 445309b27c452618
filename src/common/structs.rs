//! Common data structures.

/// Boot-level error carrying a message.
pub mod custom_error;

/// Wall clock and manually driven clock.
pub mod clock;

/// Cancellable handle to a spawned background task.
pub mod scheduled_task;
