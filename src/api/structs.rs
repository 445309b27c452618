//! Data structures for the cache API.

/// Shared data context for API request handlers.
pub mod api_service_data;

/// `?seconds=` query parameter.
pub mod query_seconds;

/// JSON body returned when the rate limiter rejects a request.
pub mod rate_limit_rejection;
