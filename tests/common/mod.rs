#![allow(dead_code)]
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use async_trait::async_trait;
use imagehost::api::structs::api_service_data::ApiServiceData;
use imagehost::cache::errors::CacheError;
use imagehost::cache::structs::cache_coordinator::CacheCoordinator;
use imagehost::cache::structs::local_cache::LocalCache;
use imagehost::cache::structs::remote_cache_client::RemoteCacheClient;
use imagehost::cache::traits::cache_backend::CacheBackend;
use imagehost::cache::traits::remote_connector::RemoteConnector;
use imagehost::common::structs::clock::ManualClock;
use imagehost::config::structs::cache_config::CacheConfig;
use imagehost::config::structs::configuration::Configuration;
use imagehost::config::structs::rate_limit_config::RateLimitConfig;
use imagehost::config::structs::redis_reconnect_config::RedisReconnectConfig;
use imagehost::rate_limit::structs::rate_limiter::RateLimiter;

pub const START_MS: u64 = 1_700_000_000_000;

/// In-memory stand-in for a Redis server that can be switched off.
#[derive(Clone)]
pub struct FakeRemote {
    pub store: Arc<LocalCache>,
    pub reachable: Arc<AtomicBool>,
    pub connects: Arc<AtomicU32>,
}

impl FakeRemote {
    pub fn new(clock: Arc<ManualClock>, reachable: bool) -> FakeRemote {
        FakeRemote {
            store: Arc::new(LocalCache::new(1_000, clock)),
            reachable: Arc::new(AtomicBool::new(reachable)),
            connects: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    pub fn connect_attempts(&self) -> u32 {
        self.connects.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), CacheError> {
        match self.reachable.load(Ordering::SeqCst) {
            true => Ok(()),
            false => Err(CacheError::ConnectionError(String::from("connection reset by peer"))),
        }
    }
}

#[async_trait]
impl RemoteConnector for FakeRemote {
    async fn connect(&self) -> Result<Arc<dyn CacheBackend>, CacheError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(Arc::new(self.clone()))
    }

    fn describe(&self) -> String {
        String::from("fake:6379/0")
    }
}

#[async_trait]
impl CacheBackend for FakeRemote {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.check()?;
        Ok(self.store.get(key))
    }

    async fn set(&self, key: &str, value: &str, ttl: u64) -> Result<(), CacheError> {
        self.check()?;
        self.store.set(key, value, ttl)
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        self.check()?;
        Ok(self.store.delete(key))
    }

    async fn clear(&self) -> Result<(), CacheError> {
        self.check()?;
        self.store.clear();
        Ok(())
    }

    async fn ttl(&self, key: &str) -> Result<Option<u64>, CacheError> {
        self.check()?;
        Ok(self.store.ttl(key))
    }

    async fn expire(&self, key: &str, ttl: u64) -> Result<bool, CacheError> {
        self.check()?;
        Ok(self.store.expire(key, ttl))
    }

    async fn key_count(&self) -> Result<usize, CacheError> {
        self.check()?;
        Ok(self.store.len())
    }
}

pub fn create_test_cache_config(enabled: bool) -> CacheConfig {
    CacheConfig {
        enabled,
        ttl: 60,
        redis_ttl: 120,
        map_cleanup_interval: 60_000,
        max_entries: 100,
    }
}

pub fn create_test_reconnect(max_retries: u32) -> RedisReconnectConfig {
    RedisReconnectConfig {
        max_retries,
        retry_interval: 1_000,
        connect_timeout: 500,
    }
}

pub fn create_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(START_MS))
}

/// Coordinator wired to a [`FakeRemote`]; nothing is connected until `start`.
pub fn create_test_coordinator(clock: Arc<ManualClock>, reachable: bool, max_retries: u32) -> (CacheCoordinator, FakeRemote) {
    let remote = FakeRemote::new(clock.clone(), reachable);
    let client = RemoteCacheClient::new(Arc::new(remote.clone()), create_test_reconnect(max_retries), clock.clone());
    let local = Arc::new(LocalCache::new(100, clock));
    let coordinator = CacheCoordinator::with_backends(create_test_cache_config(true), local, Some(client));
    (coordinator, remote)
}

pub fn create_local_coordinator(clock: Arc<ManualClock>) -> CacheCoordinator {
    let local = Arc::new(LocalCache::new(100, clock));
    CacheCoordinator::with_backends(create_test_cache_config(false), local, None)
}

pub fn create_test_rate_limit_config(limit: u32) -> RateLimitConfig {
    RateLimitConfig {
        enabled: true,
        window_size: 60_000,
        requests_per_minute: limit,
        max_clients: 100,
        cleanup_interval: 60_000,
        ban_duration: 300_000,
    }
}

pub fn create_test_service_data(limit: u32) -> Arc<ApiServiceData> {
    let clock = create_clock();
    let mut config = Configuration::init();
    config.rate_limit = create_test_rate_limit_config(limit);
    config.api_server.real_ip = String::from("X-Real-IP");
    Arc::new(ApiServiceData {
        cache: Arc::new(create_local_coordinator(clock.clone())),
        rate_limiter: Arc::new(RateLimiter::new(config.rate_limit.clone(), clock)),
        config: Arc::new(config),
    })
}
