use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use log::{debug, error, info, warn};
use parking_lot::{Mutex, RwLock};
use crate::cache::enums::connection_status::ConnectionStatus;
use crate::cache::errors::CacheError;
use crate::cache::impls::connection_state::backoff_delay;
use crate::cache::structs::connection_state::ConnectionState;
use crate::cache::structs::remote_cache_client::RemoteCacheClient;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::cache::traits::remote_connector::RemoteConnector;
use crate::common::structs::scheduled_task::ScheduledTask;
use crate::common::traits::clock::Clock;
use crate::config::structs::redis_reconnect_config::RedisReconnectConfig;
use crate::utils::sentry_tracing::{finish_trace_transaction, start_trace_transaction};

impl RemoteCacheClient {
    pub fn new(connector: Arc<dyn RemoteConnector>, reconnect: RedisReconnectConfig, clock: Arc<dyn Clock>) -> RemoteCacheClient {
        RemoteCacheClient {
            connector,
            reconnect,
            clock,
            state: Arc::new(Mutex::new(ConnectionState::default())),
            session: Arc::new(RwLock::new(None)),
            retry_task: Arc::new(Mutex::new(None)),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state.lock().clone()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.state.lock().status
    }

    pub fn retry_count(&self) -> u32 {
        self.state.lock().retry_count
    }

    pub fn is_connected(&self) -> bool {
        let state = self.state.lock();
        state.is_connected() && self.session.read().is_some()
    }

    pub fn has_pending_retry(&self) -> bool {
        self.retry_task.lock().as_ref().is_some_and(|task| task.is_active())
    }

    /// One connection attempt bounded by `connect_timeout`.
    ///
    /// A failed attempt schedules the next retry (or gives up once the retry
    /// budget is spent) and returns `false`.
    pub async fn connect(&self) -> bool {
        if self.closed.load(Ordering::SeqCst) {
            return false;
        }
        if self.is_connected() {
            return true;
        }
        let generation = {
            let mut state = self.state.lock();
            if state.status == ConnectionStatus::Connecting {
                debug!("[REDIS] Connect to {} already in progress", self.connector.describe());
                return false;
            }
            Self::transition(&mut state, ConnectionStatus::Connecting);
            state.retry_generation
        };

        let transaction = start_trace_transaction("redis_connect", "cache.connect");
        let timeout_ms = self.reconnect.connect_timeout;
        let result = match tokio::time::timeout(Duration::from_millis(timeout_ms), self.connector.connect()).await {
            Ok(result) => result,
            Err(_) => Err(CacheError::Timeout(timeout_ms)),
        };
        finish_trace_transaction(transaction, result.is_ok());

        if self.is_superseded(generation) {
            // a newer attempt (or close) owns the state now
            debug!("[REDIS] Discarding outdated connect result for {}", self.connector.describe());
            if let Ok(session) = result {
                let _ = session.close().await;
            }
            return self.is_connected();
        }

        match result {
            Ok(session) => {
                if self.closed.load(Ordering::SeqCst) {
                    let _ = session.close().await;
                    Self::transition(&mut self.state.lock(), ConnectionStatus::Disconnected);
                    return false;
                }
                let pending = {
                    let mut state = self.state.lock();
                    *self.session.write() = Some(session);
                    state.retry_count = 0;
                    state.next_retry_at = None;
                    state.retry_generation += 1;
                    Self::transition(&mut state, ConnectionStatus::Connected);
                    self.retry_task.lock().take()
                };
                drop(pending);
                info!("[REDIS] Connected to {}", self.connector.describe());
                true
            }
            Err(error) => {
                warn!("[REDIS] Connecting to {} failed: {}", self.connector.describe(), error);
                self.schedule_retry();
                false
            }
        }
    }

    fn is_superseded(&self, generation: u64) -> bool {
        let state = self.state.lock();
        state.retry_generation != generation || state.status != ConnectionStatus::Connecting
    }

    /// Cancels any pending timer, restores the full retry budget and connects.
    ///
    /// Returns `true` right away when already connected.
    pub async fn manual_reconnect(&self) -> bool {
        if self.closed.load(Ordering::SeqCst) {
            return false;
        }
        if self.is_connected() {
            return true;
        }
        let pending = {
            let mut state = self.state.lock();
            state.retry_count = 0;
            state.next_retry_at = None;
            state.retry_generation += 1;
            Self::transition(&mut state, ConnectionStatus::Disconnected);
            self.retry_task.lock().take()
        };
        drop(pending);
        info!("[REDIS] Manual reconnect to {} requested", self.connector.describe());
        self.connect().await
    }

    /// Zeroes the retry counter without connecting.
    ///
    /// A client that had given up moves back to `Disconnected`; a pending
    /// timer keeps running with the restored budget.
    pub fn reset_retry_count(&self) {
        let mut state = self.state.lock();
        let exhausted = state.is_exhausted(self.reconnect.max_retries);
        state.retry_count = 0;
        if exhausted {
            Self::transition(&mut state, ConnectionStatus::Disconnected);
        }
        info!("[REDIS] Retry count reset");
    }

    /// Drops the session and cancels the retry timer. Further calls fail
    /// with `Unavailable`.
    pub async fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        let (session, pending) = {
            let mut state = self.state.lock();
            state.next_retry_at = None;
            state.retry_generation += 1;
            Self::transition(&mut state, ConnectionStatus::Disconnected);
            (self.session.write().take(), self.retry_task.lock().take())
        };
        drop(pending);
        if let Some(session) = session
            && let Err(error) = session.close().await {
                warn!("[REDIS] Closing session to {} failed: {}", self.connector.describe(), error);
            }
        info!("[REDIS] Client for {} closed", self.connector.describe());
    }

    pub(crate) fn schedule_retry(&self) {
        if self.closed.load(Ordering::SeqCst) {
            return;
        }
        let max_retries = self.reconnect.max_retries;
        let mut state = self.state.lock();
        state.retry_generation += 1;

        if state.retry_count >= max_retries {
            state.next_retry_at = None;
            Self::transition(&mut state, ConnectionStatus::Backoff);
            let pending = self.retry_task.lock().take();
            drop(state);
            drop(pending);
            error!(
                "[REDIS] Giving up on {} after {} retries, serving from local cache until a manual reconnect",
                self.connector.describe(), max_retries
            );
            return;
        }

        state.retry_count += 1;
        let retry_count = state.retry_count;
        let delay = backoff_delay(self.reconnect.retry_interval, retry_count);
        state.next_retry_at = Some(self.clock.now_ms().saturating_add(delay));
        let generation = state.retry_generation;
        Self::transition(&mut state, ConnectionStatus::Backoff);

        let client = self.clone();
        let task = ScheduledTask::once("redis_reconnect", Duration::from_millis(delay), async move {
            client.run_scheduled_retry(generation).await;
        });
        let pending = self.retry_task.lock().replace(task);
        drop(state);
        drop(pending);
        warn!("[REDIS] Retry {}/{} for {} in {}ms", retry_count, max_retries, self.connector.describe(), delay);
    }

    async fn run_scheduled_retry(&self, generation: u64) {
        {
            let state = self.state.lock();
            if state.retry_generation != generation || self.closed.load(Ordering::SeqCst) {
                return;
            }
            // this task owns the slot; release it so the next schedule cannot abort us
            if let Some(task) = self.retry_task.lock().take() {
                task.detach();
            }
        }
        self.connect().await;
    }

    /// Tears down `failed` after a connection error, unless a newer session
    /// has replaced it in the meantime.
    fn handle_failure(&self, failed: &Arc<dyn CacheBackend>, error: &CacheError) {
        if !error.is_connection_failure() {
            return;
        }
        let session = {
            let mut state = self.state.lock();
            if state.status != ConnectionStatus::Connected {
                return;
            }
            let mut current = self.session.write();
            if !current.as_ref().is_some_and(|session| Arc::ptr_eq(session, failed)) {
                debug!("[REDIS] Ignoring error from a replaced session: {}", error);
                return;
            }
            Self::transition(&mut state, ConnectionStatus::Disconnected);
            current.take()
        };
        drop(session);
        warn!("[REDIS] Lost {}: {}", self.connector.describe(), error);
        self.schedule_retry();
    }

    fn current_session(&self) -> Result<Arc<dyn CacheBackend>, CacheError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(CacheError::Unavailable(String::from("remote cache client closed")));
        }
        let state = self.state.lock();
        if !state.is_connected() {
            return Err(CacheError::Unavailable(format!("remote cache is {:?}", state.status)));
        }
        self.session.read().clone()
            .ok_or_else(|| CacheError::Unavailable(String::from("remote cache has no session")))
    }

    fn transition(state: &mut ConnectionState, status: ConnectionStatus) {
        if state.status != status {
            debug!("[REDIS] {:?} -> {:?} (retry {})", state.status, status, state.retry_count);
            state.status = status;
        }
    }
}

#[async_trait]
impl CacheBackend for RemoteCacheClient {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let session = self.current_session()?;
        session.get(key).await.inspect_err(|e| self.handle_failure(&session, e))
    }

    async fn set(&self, key: &str, value: &str, ttl: u64) -> Result<(), CacheError> {
        let session = self.current_session()?;
        session.set(key, value, ttl).await.inspect_err(|e| self.handle_failure(&session, e))
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let session = self.current_session()?;
        session.delete(key).await.inspect_err(|e| self.handle_failure(&session, e))
    }

    async fn clear(&self) -> Result<(), CacheError> {
        let session = self.current_session()?;
        session.clear().await.inspect_err(|e| self.handle_failure(&session, e))
    }

    async fn ttl(&self, key: &str) -> Result<Option<u64>, CacheError> {
        let session = self.current_session()?;
        session.ttl(key).await.inspect_err(|e| self.handle_failure(&session, e))
    }

    async fn expire(&self, key: &str, ttl: u64) -> Result<bool, CacheError> {
        let session = self.current_session()?;
        session.expire(key, ttl).await.inspect_err(|e| self.handle_failure(&session, e))
    }

    async fn key_count(&self) -> Result<usize, CacheError> {
        let session = self.current_session()?;
        session.key_count().await.inspect_err(|e| self.handle_failure(&session, e))
    }

    async fn close(&self) -> Result<(), CacheError> {
        RemoteCacheClient::close(self).await;
        Ok(())
    }
}
