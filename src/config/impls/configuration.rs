use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::rate_limit_config::RateLimitConfig;
use crate::config::structs::redis_config::RedisConfig;
use crate::config::structs::redis_reconnect_config::RedisReconnectConfig;
use crate::config::structs::sentry_config::SentryConfig;

const OPTIONAL_SECTIONS: [&str; 4] = ["cache", "redis", "rate_limit", "api_server"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            cache: CacheConfig::default(),
            redis: RedisConfig::default(),
            rate_limit: RateLimitConfig::default(),
            api_server: ApiServerConfig::default(),
            sentry_config: SentryConfig::default(),
            warnings: Vec::new(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, ConfigurationError> {
        let raw = String::from_utf8_lossy(data);
        let table: toml::Table = toml::from_str(&raw).map_err(ConfigurationError::ParseError)?;
        let mut config: Configuration = toml::from_str(&raw).map_err(ConfigurationError::ParseError)?;
        for section in OPTIONAL_SECTIONS {
            if !table.contains_key(section) {
                config.warnings.push(format!("[CONFIG] Section [{section}] missing, using defaults"));
            }
        }
        Ok(config)
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice())
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        match Configuration::load_file(path) {
            Ok(config) => Ok(config),
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new(&format!("create {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                }
            }
        }
    }

    /// Replaces invalid values with their defaults.
    ///
    /// Returns every warning collected while loading plus one line per
    /// corrected value; nothing here aborts the boot.
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut warnings = std::mem::take(&mut self.warnings);

        if parse_log_level(&self.log_level).is_err() {
            warnings.push(format!("[CONFIG] Unknown log_level '{}', using 'info'", self.log_level));
            self.log_level = String::from("info");
        }

        let cache = CacheConfig::default();
        default_if_zero(&mut self.cache.ttl, cache.ttl, "cache.ttl", &mut warnings);
        default_if_zero(&mut self.cache.redis_ttl, cache.redis_ttl, "cache.redis_ttl", &mut warnings);
        default_if_zero(&mut self.cache.map_cleanup_interval, cache.map_cleanup_interval, "cache.map_cleanup_interval", &mut warnings);
        default_if_zero(&mut self.cache.max_entries, cache.max_entries, "cache.max_entries", &mut warnings);

        let redis = RedisConfig::default();
        if self.redis.host.trim().is_empty() {
            warnings.push(format!("[CONFIG] redis.host is empty, using '{}'", redis.host));
            self.redis.host = redis.host;
        }
        default_if_zero(&mut self.redis.port, redis.port, "redis.port", &mut warnings);
        let reconnect = RedisReconnectConfig::default();
        default_if_zero(&mut self.redis.reconnect.retry_interval, reconnect.retry_interval, "redis.reconnect.retry_interval", &mut warnings);
        default_if_zero(&mut self.redis.reconnect.connect_timeout, reconnect.connect_timeout, "redis.reconnect.connect_timeout", &mut warnings);

        let rate_limit = RateLimitConfig::default();
        default_if_zero(&mut self.rate_limit.window_size, rate_limit.window_size, "rate_limit.window_size", &mut warnings);
        default_if_zero(&mut self.rate_limit.requests_per_minute, rate_limit.requests_per_minute, "rate_limit.requests_per_minute", &mut warnings);
        default_if_zero(&mut self.rate_limit.max_clients, rate_limit.max_clients, "rate_limit.max_clients", &mut warnings);
        default_if_zero(&mut self.rate_limit.cleanup_interval, rate_limit.cleanup_interval, "rate_limit.cleanup_interval", &mut warnings);
        default_if_zero(&mut self.rate_limit.ban_duration, rate_limit.ban_duration, "rate_limit.ban_duration", &mut warnings);

        if !Self::validate_bind_address(&self.api_server.bind_address) {
            let api_server = ApiServerConfig::default();
            warnings.push(format!(
                "[CONFIG] api_server.bind_address '{}' is not a valid socket address, using '{}'",
                self.api_server.bind_address, api_server.bind_address
            ));
            self.api_server.bind_address = api_server.bind_address;
        }
        if self.api_server.threads == 0 {
            warnings.push(String::from("[CONFIG] api_server.threads is 0, using 1"));
            self.api_server.threads = 1;
        }

        warnings
    }

    pub fn validate_bind_address(address: &str) -> bool {
        address.parse::<SocketAddr>().is_ok()
    }
}

fn default_if_zero<T>(value: &mut T, fallback: T, name: &str, warnings: &mut Vec<String>)
where
    T: PartialEq + Default + Display + Copy,
{
    if *value == T::default() {
        warnings.push(format!("[CONFIG] {name} must be positive, using {fallback}"));
        *value = fallback;
    }
}
