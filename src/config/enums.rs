//! Configuration enumerations.

/// Errors raised while reading or writing configuration files.
pub mod configuration_error;
