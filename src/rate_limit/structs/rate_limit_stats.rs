use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitStats {
    pub tracked_clients: usize,
    pub active_bans: usize,
    pub allowed: u64,
    pub rejected: u64,
    pub bans_issued: u64,
}
