#[cfg(test)]
mod config_tests {
    mod defaults_tests {
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_init_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert!(config.cache.enabled);
            assert_eq!(config.cache.ttl, 3600);
            assert_eq!(config.cache.redis_ttl, 86400);
            assert_eq!(config.cache.max_entries, 1000);
            assert_eq!(config.redis.port, 6379);
            assert_eq!(config.redis.reconnect.max_retries, 10);
            assert_eq!(config.rate_limit.window_size, 60_000);
            assert_eq!(config.rate_limit.ban_duration, 300_000);
            assert!(config.api_server.threads >= 1);
        }

        #[test]
        fn test_init_is_already_sane() {
            let mut config = Configuration::init();
            assert!(config.sanitize().is_empty());
        }
    }

    mod loading_tests {
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_load_missing_sections_warns() {
            let mut config = Configuration::load(b"log_level = \"debug\"\n").unwrap();
            let warnings = config.sanitize();
            assert_eq!(config.log_level, "debug");
            assert_eq!(warnings.len(), 4);
            assert!(warnings.iter().any(|w| w.contains("[rate_limit]")));
            assert_eq!(config.rate_limit.requests_per_minute, 60);
        }

        #[test]
        fn test_load_partial_section_fills_defaults() {
            let data = br#"
log_level = "info"

[cache]
enabled = false

[redis]
host = "cache.internal"

[redis.reconnect]
maxRetries = 3
retryInterval = 1000

[rate_limit]
requests_per_minute = 20

[api_server]
bind_address = "127.0.0.1:9000"
"#;
            let mut config = Configuration::load(data).unwrap();
            assert!(config.sanitize().is_empty());
            assert!(!config.cache.enabled);
            assert_eq!(config.cache.ttl, 3600);
            assert_eq!(config.redis.host, "cache.internal");
            assert_eq!(config.redis.reconnect.max_retries, 3);
            assert_eq!(config.redis.reconnect.retry_interval, 1000);
            assert_eq!(config.redis.reconnect.connect_timeout, 10_000);
            assert_eq!(config.rate_limit.requests_per_minute, 20);
            assert_eq!(config.rate_limit.window_size, 60_000);
        }

        #[test]
        fn test_load_rejects_broken_toml() {
            assert!(Configuration::load(b"log_level = ").is_err());
        }

        #[test]
        fn test_roundtrip_through_toml_text() {
            let config = Configuration::init();
            let text = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(text.as_bytes()).unwrap();
            assert_eq!(loaded.cache, config.cache);
            assert_eq!(loaded.redis, config.redis);
            assert_eq!(loaded.rate_limit, config.rate_limit);
            assert!(loaded.warnings.is_empty());
        }
    }

    mod sanitize_tests {
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_sanitize_replaces_zero_values() {
            let mut config = Configuration::init();
            config.rate_limit.window_size = 0;
            config.rate_limit.requests_per_minute = 0;
            config.redis.reconnect.retry_interval = 0;
            config.cache.max_entries = 0;
            let warnings = config.sanitize();
            assert_eq!(warnings.len(), 4);
            assert_eq!(config.rate_limit.window_size, 60_000);
            assert_eq!(config.rate_limit.requests_per_minute, 60);
            assert_eq!(config.redis.reconnect.retry_interval, 5000);
            assert_eq!(config.cache.max_entries, 1000);
        }

        #[test]
        fn test_sanitize_fixes_log_level_and_address() {
            let mut config = Configuration::init();
            config.log_level = String::from("chatty");
            config.api_server.bind_address = String::from("not-an-address");
            config.redis.host = String::from("  ");
            let warnings = config.sanitize();
            assert_eq!(warnings.len(), 3);
            assert_eq!(config.log_level, "info");
            assert_eq!(config.api_server.bind_address, "0.0.0.0:8080");
            assert_eq!(config.redis.host, "127.0.0.1");
        }

        #[test]
        fn test_sanitize_drains_load_warnings_once() {
            let mut config = Configuration::load(b"log_level = \"info\"\n").unwrap();
            assert_eq!(config.sanitize().len(), 4);
            assert!(config.sanitize().is_empty());
        }
    }

    mod redis_config_tests {
        use crate::config::structs::redis_config::RedisConfig;

        #[test]
        fn test_connection_url_without_password() {
            let config = RedisConfig::default();
            assert_eq!(config.connection_url(), "redis://127.0.0.1:6379/0");
        }

        #[test]
        fn test_connection_url_encodes_password() {
            let config = RedisConfig {
                password: Some(String::from("p@ss/word")),
                db: 2,
                ..RedisConfig::default()
            };
            assert_eq!(config.connection_url(), "redis://:p%40ss%2Fword@127.0.0.1:6379/2");
            assert_eq!(config.display_address(), "127.0.0.1:6379/2");
        }

        #[test]
        fn test_empty_password_is_ignored() {
            let config = RedisConfig {
                password: Some(String::new()),
                ..RedisConfig::default()
            };
            assert_eq!(config.connection_url(), "redis://127.0.0.1:6379/0");
        }
    }
}
