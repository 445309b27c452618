use std::fmt;
use crate::cache::structs::cache_key::CacheKey;

impl CacheKey {
    /// `resource:<path>:<variant>`, the key used for read-through lookups of
    /// a resolved resource.
    pub fn resource(path: &str, variant: &str) -> CacheKey {
        CacheKey(format!("resource:{}:{}", path.trim_matches('/'), variant))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.0
    }
}
