//! Implementation blocks for common types.

pub mod clock;

pub mod custom_error;

pub mod scheduled_task;
