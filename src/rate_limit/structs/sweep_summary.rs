use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepSummary {
    pub expired_bans: usize,
    pub empty_windows: usize,
    pub evicted_clients: usize,
}
