//! Configuration management module.
//!
//! This module handles loading, parsing, and sanitizing the service
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **cache**: Local cache sizing and default TTLs, remote cache toggle
//! - **redis**: Remote cache address, credentials and reconnect policy
//! - **rate_limit**: Sliding window size, per-window limit, ban duration
//! - **api_server**: Admin/cache API listener settings
//! - **sentry_config**: Error reporting configuration
//!
//! # Features
//!
//! - TOML file parsing with detailed error messages
//! - Missing sections fall back to documented defaults with a warning
//! - Invalid values (zero windows, zero limits, bad addresses) are replaced
//!   by defaults instead of aborting the boot
//! - Default configuration generation (`--create-config`)
//!
//! # Example
//!
//! ```rust,ignore
//! use imagehost::config::structs::configuration::Configuration;
//!
//! let mut config = Configuration::load_from_file("config.toml", false)?;
//! for warning in config.sanitize() {
//!     log::warn!("{warning}");
//! }
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;
