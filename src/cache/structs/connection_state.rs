use serde::{Deserialize, Serialize};
use crate::cache::enums::connection_status::ConnectionStatus;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectionState {
    pub status: ConnectionStatus,
    /// Consecutive failed attempts, never above the configured maximum.
    pub retry_count: u32,
    /// Clock time (ms) of the pending retry, if one is scheduled.
    pub next_retry_at: Option<u64>,
    /// Bumped for every scheduled or cancelled retry so a stale timer can tell it lost.
    #[serde(skip)]
    pub(crate) retry_generation: u64,
}
