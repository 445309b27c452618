use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BanRecord {
    pub start_time: u64,
    /// Clock time (ms) at which the ban ends.
    pub end_time: u64,
    pub reason: String,
}
