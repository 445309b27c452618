//! Implementation blocks for rate limiting types.

pub mod ban_record;

pub mod rate_limit_decision;

pub mod rate_limiter;

pub mod rate_limiter_state;
