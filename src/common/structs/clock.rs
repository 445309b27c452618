use std::sync::atomic::AtomicU64;

/// Wall clock backed by `SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    pub(crate) now: AtomicU64,
}
