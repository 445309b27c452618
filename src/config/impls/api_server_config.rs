use std::thread::available_parallelism;
use crate::config::structs::api_server_config::ApiServerConfig;

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind_address: "0.0.0.0:8080".to_string(),
            real_ip: "X-Real-IP".to_string(),
            keep_alive: 60,
            request_timeout: 15,
            disconnect_timeout: 15,
            threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(1),
        }
    }
}
