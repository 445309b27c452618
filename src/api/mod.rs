//! REST API for cache administration.
//!
//! Every request, including unknown routes, first passes the rate limiter;
//! rejected clients get a `429` or `403` JSON body instead of the handler's
//! response.
//!
//! # Endpoints Overview
//!
//! - `GET /cache/status` - Hit/miss counters, key count and backend state
//! - `POST /cache/clear` - Clear the local cache and, when connected, Redis
//! - `POST /cache/reconnect` - Manual reconnect with a fresh retry budget
//! - `POST /cache/reset` - Reset the retry counter without reconnecting
//! - `GET /cache/ttl/{key}` - Remaining lifetime of a key in seconds
//! - `POST /cache/expire/{key}?seconds=N` - Set a new lifetime for a key
//!
//! # Rate limit rejections
//!
//! ```json
//! {"error": "Forbidden", "message": "...", "clientIP": "203.0.113.7",
//!  "limit": 60, "window": 60, "remaining": 0, "banRemainingSeconds": 287}
//! ```

/// Data structures for API service context.
pub mod structs;

/// Implementation blocks for API data structures.
pub mod impls;

/// Core API service functions and route configuration.
#[allow(clippy::module_inception)]
pub mod api;

/// Cache administration endpoints.
pub mod api_cache;

pub mod tests;
