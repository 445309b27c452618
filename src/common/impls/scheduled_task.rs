use std::future::Future;
use std::time::Duration;
use log::debug;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use crate::common::structs::scheduled_task::ScheduledTask;

impl ScheduledTask {
    /// Runs `job` once after `delay`.
    pub fn once<F>(name: &'static str, delay: Duration, job: F) -> ScheduledTask
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            job.await;
        });
        ScheduledTask { name, handle: Some(handle) }
    }

    /// Runs `tick` every `period`, first run one period from now.
    pub fn interval<F, Fut>(name: &'static str, period: Duration, mut tick: F) -> ScheduledTask
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let period = period.max(Duration::from_millis(1));
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                tick().await;
            }
        });
        ScheduledTask { name, handle: Some(handle) }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("[TASK] Cancelled {}", self.name);
        }
    }

    /// Releases the handle without aborting the task.
    ///
    /// Used by a one-shot job that is about to replace itself with a new
    /// schedule, since aborting the running task from inside would cut it
    /// off at its next await point.
    pub fn detach(mut self) {
        self.handle.take();
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
