pub mod sentry_tracing;
