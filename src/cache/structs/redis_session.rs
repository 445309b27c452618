use redis::aio::MultiplexedConnection;

#[derive(Clone)]
pub struct RedisSession {
    pub(crate) connection: MultiplexedConnection,
}
