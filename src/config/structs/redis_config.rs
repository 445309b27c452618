use serde::{Deserialize, Serialize};
use crate::config::structs::redis_reconnect_config::RedisReconnectConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    pub db: i64,
    pub reconnect: RedisReconnectConfig,
}
