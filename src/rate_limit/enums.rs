//! Rate limiting enumerations.

/// Outcome of a single admission check.
pub mod rate_limit_decision;
