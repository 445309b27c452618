use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use parking_lot::{Mutex, RwLock};
use crate::cache::structs::connection_state::ConnectionState;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::cache::traits::remote_connector::RemoteConnector;
use crate::common::structs::scheduled_task::ScheduledTask;
use crate::common::traits::clock::Clock;
use crate::config::structs::redis_reconnect_config::RedisReconnectConfig;

/// Handle to the remote cache; clones share one connection state.
#[derive(Clone)]
pub struct RemoteCacheClient {
    pub(crate) connector: Arc<dyn RemoteConnector>,
    pub(crate) reconnect: RedisReconnectConfig,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) state: Arc<Mutex<ConnectionState>>,
    pub(crate) session: Arc<RwLock<Option<Arc<dyn CacheBackend>>>>,
    pub(crate) retry_task: Arc<Mutex<Option<ScheduledTask>>>,
    pub(crate) closed: Arc<AtomicBool>,
}
