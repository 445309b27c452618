use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct QuerySeconds {
    pub(crate) seconds: Option<u64>,
}
