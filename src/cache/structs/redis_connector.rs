#[derive(Debug, Clone)]
pub struct RedisConnector {
    pub(crate) client: redis::Client,
    pub(crate) address: String,
}
