use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use crate::config::structs::redis_config::RedisConfig;
use crate::config::structs::redis_reconnect_config::RedisReconnectConfig;

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 6379,
            password: None,
            db: 0,
            reconnect: RedisReconnectConfig::default(),
        }
    }
}

impl Default for RedisReconnectConfig {
    fn default() -> Self {
        Self {
            max_retries: 10,
            retry_interval: 5000,
            connect_timeout: 10_000,
        }
    }
}

impl RedisConfig {
    /// Connection URL understood by the redis client, password percent-encoded.
    pub fn connection_url(&self) -> String {
        match self.password.as_deref().filter(|password| !password.is_empty()) {
            Some(password) => format!(
                "redis://:{}@{}:{}/{}",
                utf8_percent_encode(password, NON_ALPHANUMERIC),
                self.host,
                self.port,
                self.db
            ),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }

    /// Address for log lines, never includes the password.
    pub fn display_address(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.db)
    }
}
