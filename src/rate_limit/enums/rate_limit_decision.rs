use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RateLimitDecision {
    Allowed,
    /// This request hit the limit and a ban was just issued.
    LimitExceeded,
    /// The client is serving an earlier ban.
    Banned,
    /// Unknown client while the tracking table is full; no ban.
    CapacityExceeded,
}
