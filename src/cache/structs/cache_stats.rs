use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Hits divided by lookups, 0.0 before the first lookup.
    pub hit_rate: f64,
    pub keys: usize,
    pub backend_connected: bool,
    pub retry_count: u32,
}
