use std::sync::Arc;
use linked_hash_map::LinkedHashMap;
use parking_lot::Mutex;
use crate::common::traits::clock::Clock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalCacheEntry {
    pub value: String,
    /// Clock time (ms) after which the entry is absent.
    pub expires_at: u64,
}

/// Bounded in-process cache.
///
/// Entries are kept in recency order; the front of the map is the least
/// recently used entry and is the one evicted when the cache is full.
#[derive(Debug)]
pub struct LocalCache {
    pub(crate) capacity: usize,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) entries: Mutex<LinkedHashMap<String, LocalCacheEntry>>,
}
