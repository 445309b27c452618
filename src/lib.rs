//! # Imagehost resilient cache layer
//!
//! Caching and admission control for an image hosting service, built with
//! Rust and the Actix-web framework.
//!
//! ## Overview
//!
//! Resolved resources are cached under `resource:<path>:<variant>` keys. The
//! cache prefers a shared Redis database and falls back to a bounded
//! in-process LRU cache whenever Redis is unreachable, reconnecting in the
//! background with exponential backoff. Every inbound request first passes a
//! per-client sliding window rate limiter that hands out temporary bans.
//!
//! ## Features
//!
//! - **Failover**: Per-call fallback from Redis to the local cache, no write-behind
//! - **Backoff**: `retry_interval * 1.5^(n-1)` retries up to `max_retries`, then manual reconnect
//! - **Local cache**: Fixed capacity, LRU eviction, per-entry TTL
//! - **Rate limiting**: Sliding window per client IP, bans, bounded client table
//! - **Admin API**: Cache status, clear, reconnect, retry reset, TTL inspection
//! - **Monitoring**: Structured logging and optional Sentry integration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use imagehost::cache::structs::cache_coordinator::CacheCoordinator;
//! use imagehost::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let cache = CacheCoordinator::new(config.cache.clone(), &config.redis, Arc::new(SystemClock))?;
//! cache.start().await;
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Cache administration endpoints and request admission
//! - [`cache`] - Local, remote and coordinated cache backends
//! - [`common`] - Logging, clocks, scheduled tasks and error helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`rate_limit`] - Sliding window rate limiter with bans
//! - [`structs`] - CLI argument parsing
//! - [`utils`] - Sentry tracing helpers

/// REST API module for cache administration.
///
/// Every route, including the 404 fallback, runs the rate limiter first.
pub mod api;

/// Caching layer with Redis failover to a local LRU cache.
pub mod cache;

/// Common utilities and shared functionality.
///
/// Contains logging setup, time helpers, the `Clock` abstraction and
/// cancellable background tasks.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and sanitizing configuration from TOML files.
pub mod config;

/// Per-client request admission.
pub mod rate_limit;

/// CLI argument parsing.
pub mod structs;

/// Sentry helpers.
pub mod utils;
