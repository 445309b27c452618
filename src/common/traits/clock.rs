use std::fmt::Debug;

/// Source of "now" in milliseconds since the Unix epoch.
///
/// Everything that reasons about windows, bans or expiry reads time through
/// this trait, so tests can move time forward explicitly instead of sleeping.
pub trait Clock: Send + Sync + Debug {
    fn now_ms(&self) -> u64;
}
