use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ApiServerConfig {
    pub enabled: bool,
    pub bind_address: String,
    /// Header carrying the client address behind a proxy, empty to use the peer address.
    pub real_ip: String,
    pub keep_alive: u64,
    pub request_timeout: u64,
    pub disconnect_timeout: u64,
    pub threads: u64,
}
