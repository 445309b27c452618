//! Cache enumerations.

/// Remote backend connection status.
pub mod connection_status;
