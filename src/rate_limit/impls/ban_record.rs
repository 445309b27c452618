use crate::rate_limit::structs::ban_record::BanRecord;

impl BanRecord {
    pub fn new(now: u64, duration: u64, reason: &str) -> BanRecord {
        BanRecord {
            start_time: now,
            end_time: now.saturating_add(duration),
            reason: reason.to_string(),
        }
    }

    pub fn is_active(&self, now: u64) -> bool {
        now < self.end_time
    }

    pub fn remaining_ms(&self, now: u64) -> u64 {
        self.end_time.saturating_sub(now)
    }
}
