//! Shared trait definitions.

/// Time source abstraction.
pub mod clock;
