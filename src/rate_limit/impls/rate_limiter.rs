use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use ahash::AHashMap;
use log::{debug, info, warn};
use parking_lot::Mutex;
use crate::common::common::ms_to_secs_ceil;
use crate::common::structs::scheduled_task::ScheduledTask;
use crate::common::traits::clock::Clock;
use crate::config::structs::rate_limit_config::RateLimitConfig;
use crate::rate_limit::enums::rate_limit_decision::RateLimitDecision;
use crate::rate_limit::structs::ban_record::BanRecord;
use crate::rate_limit::structs::rate_limit_stats::RateLimitStats;
use crate::rate_limit::structs::rate_limit_stats_atomics::RateLimitStatsAtomics;
use crate::rate_limit::structs::rate_limit_status::RateLimitStatus;
use crate::rate_limit::structs::rate_limiter::RateLimiter;
use crate::rate_limit::structs::rate_limiter_state::RateLimiterState;
use crate::rate_limit::structs::sweep_summary::SweepSummary;

const BAN_REASON: &str = "rate limit exceeded";

impl RateLimiter {
    pub fn new(config: RateLimitConfig, clock: Arc<dyn Clock>) -> RateLimiter {
        RateLimiter {
            config,
            clock,
            state: Mutex::new(RateLimiterState::default()),
            stats: RateLimitStatsAtomics::default(),
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    pub fn is_allowed(&self, client: &str) -> bool {
        self.check(client).is_allowed()
    }

    /// Records one request from `client` and decides whether to admit it.
    pub fn check(&self, client: &str) -> RateLimitDecision {
        if !self.config.enabled {
            return RateLimitDecision::Allowed;
        }
        let now = self.clock.now_ms();
        let decision = self.check_at(client, now);
        match decision {
            RateLimitDecision::Allowed => {
                self.stats.allowed.fetch_add(1, Ordering::Relaxed);
            }
            RateLimitDecision::LimitExceeded => {
                self.stats.rejected.fetch_add(1, Ordering::Relaxed);
                self.stats.bans_issued.fetch_add(1, Ordering::Relaxed);
                warn!("[RATE LIMIT] {} exceeded {} requests per {}ms, banned for {}ms",
                    client, self.config.requests_per_minute, self.config.window_size, self.config.ban_duration);
            }
            RateLimitDecision::Banned => {
                self.stats.rejected.fetch_add(1, Ordering::Relaxed);
                debug!("[RATE LIMIT] {} rejected, ban still active", client);
            }
            RateLimitDecision::CapacityExceeded => {
                self.stats.rejected.fetch_add(1, Ordering::Relaxed);
                warn!("[RATE LIMIT] Tracking table full ({} clients), rejected {}", self.config.max_clients, client);
            }
        }
        decision
    }

    fn check_at(&self, client: &str, now: u64) -> RateLimitDecision {
        let limit = self.config.requests_per_minute as usize;
        let cutoff = now.saturating_sub(self.config.window_size);
        let mut lock = self.state.lock();
        let state = &mut *lock;

        if let Some(ban) = state.bans.get(client) {
            if ban.is_active(now) {
                return RateLimitDecision::Banned;
            }
            state.bans.remove(client);
            state.windows.remove(client);
            debug!("[RATE LIMIT] Ban on {} expired", client);
        }

        if let Some(window) = state.windows.get_mut(client) {
            evict_before(window, cutoff);
            if window.len() >= limit {
                state.windows.remove(client);
                state.bans.insert(client.to_string(), BanRecord::new(now, self.config.ban_duration, BAN_REASON));
                return RateLimitDecision::LimitExceeded;
            }
            window.push_back(now);
            return RateLimitDecision::Allowed;
        }

        if state.tracked() >= self.config.max_clients {
            drop_stale_windows(&mut state.windows, cutoff);
            state.bans.retain(|_, ban| ban.is_active(now));
            if state.tracked() >= self.config.max_clients {
                return RateLimitDecision::CapacityExceeded;
            }
        }
        if limit == 0 {
            state.bans.insert(client.to_string(), BanRecord::new(now, self.config.ban_duration, BAN_REASON));
            return RateLimitDecision::LimitExceeded;
        }
        state.windows.insert(client.to_string(), VecDeque::from([now]));
        RateLimitDecision::Allowed
    }

    /// Read-only view of `client`, as reported in rejection bodies.
    pub fn status(&self, client: &str) -> RateLimitStatus {
        let limit = self.config.requests_per_minute;
        if !self.config.enabled {
            return RateLimitStatus {
                banned: false,
                remaining: Some(limit),
                reset_seconds: Some(self.config.window_secs()),
                ban_remaining_seconds: None,
            };
        }

        let now = self.clock.now_ms();
        let cutoff = now.saturating_sub(self.config.window_size);
        let lock = self.state.lock();

        if let Some(ban) = lock.bans.get(client)
            && ban.is_active(now) {
                return RateLimitStatus {
                    banned: true,
                    remaining: Some(0),
                    reset_seconds: None,
                    ban_remaining_seconds: Some(ms_to_secs_ceil(ban.remaining_ms(now))),
                };
            }

        let (count, newest) = match lock.windows.get(client) {
            None => (0, None),
            Some(window) => {
                let active = window.iter().filter(|timestamp| **timestamp >= cutoff);
                (active.clone().count(), active.max().copied())
            }
        };
        let reset_seconds = match newest {
            Some(newest) => ms_to_secs_ceil((newest + self.config.window_size).saturating_sub(now)),
            None => self.config.window_secs(),
        };
        RateLimitStatus {
            banned: false,
            remaining: Some(limit.saturating_sub(count as u32)),
            reset_seconds: Some(reset_seconds),
            ban_remaining_seconds: None,
        }
    }

    /// Drops expired bans (with their windows), stale timestamps and empty
    /// windows, then evicts the least recently active clients beyond
    /// `max_clients`.
    pub fn sweep(&self) -> SweepSummary {
        let now = self.clock.now_ms();
        let cutoff = now.saturating_sub(self.config.window_size);
        let mut summary = SweepSummary::default();
        let mut lock = self.state.lock();
        let state = &mut *lock;

        let expired: Vec<String> = state.bans.iter()
            .filter(|(_, ban)| !ban.is_active(now))
            .map(|(client, _)| client.clone())
            .collect();
        for client in expired.iter() {
            state.bans.remove(client);
            state.windows.remove(client);
        }
        summary.expired_bans = expired.len();

        summary.empty_windows = drop_stale_windows(&mut state.windows, cutoff);

        if state.windows.len() > self.config.max_clients {
            let mut by_activity: Vec<(u64, String)> = state.windows.iter()
                .map(|(client, window)| (window.back().copied().unwrap_or(0), client.clone()))
                .collect();
            by_activity.sort_unstable();
            let excess = state.windows.len() - self.config.max_clients;
            for (_, client) in by_activity.into_iter().take(excess) {
                state.windows.remove(&client);
            }
            summary.evicted_clients = excess;
        }

        summary
    }

    pub fn stats(&self) -> RateLimitStats {
        let now = self.clock.now_ms();
        let lock = self.state.lock();
        RateLimitStats {
            tracked_clients: lock.windows.len(),
            active_bans: lock.bans.values().filter(|ban| ban.is_active(now)).count(),
            allowed: self.stats.allowed.load(Ordering::Relaxed),
            rejected: self.stats.rejected.load(Ordering::Relaxed),
            bans_issued: self.stats.bans_issued.load(Ordering::Relaxed),
        }
    }

    pub fn ban(&self, client: &str) -> Option<BanRecord> {
        self.state.lock().bans.get(client).cloned()
    }

    /// Runs [`RateLimiter::sweep`] every `cleanup_interval` until the handle
    /// is cancelled or dropped.
    pub fn start_sweeper(self: &Arc<Self>) -> ScheduledTask {
        let limiter = self.clone();
        let period = Duration::from_millis(self.config.cleanup_interval);
        info!("[RATE LIMIT] Sweeping every {}ms", self.config.cleanup_interval);
        ScheduledTask::interval("rate_limit_sweeper", period, move || {
            let limiter = limiter.clone();
            async move {
                let summary = limiter.sweep();
                if summary != SweepSummary::default() {
                    debug!("[RATE LIMIT] Sweep: {} bans expired, {} windows emptied, {} clients evicted",
                        summary.expired_bans, summary.empty_windows, summary.evicted_clients);
                }
            }
        })
    }
}

fn evict_before(window: &mut VecDeque<u64>, cutoff: u64) {
    while window.front().is_some_and(|timestamp| *timestamp < cutoff) {
        window.pop_front();
    }
}

fn drop_stale_windows(windows: &mut AHashMap<String, VecDeque<u64>>, cutoff: u64) -> usize {
    let before = windows.len();
    windows.retain(|_, window| {
        evict_before(window, cutoff);
        !window.is_empty()
    });
    before - windows.len()
}
