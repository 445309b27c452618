use tokio::task::JoinHandle;

/// Owned handle to a background timer or periodic job.
///
/// Dropping the handle aborts the task, so a component that stores its
/// timers in `ScheduledTask` fields cannot leak them past its own lifetime.
#[derive(Debug)]
pub struct ScheduledTask {
    pub(crate) name: &'static str,
    pub(crate) handle: Option<JoinHandle<()>>,
}
