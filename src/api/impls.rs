//! Implementation blocks for API types.

pub mod rate_limit_rejection;
