//! Cache trait definitions.

/// Capability set shared by every cache backend.
pub mod cache_backend;

/// Factory for remote cache sessions.
pub mod remote_connector;
