//! Key-value store used for liveness checks and feedback records.
//!
//! `AppState` holds an `Arc<dyn KeyValueStore>`; production wires `RedisStore`,
//! tests wire `MemoryStore`.

use async_trait::async_trait;
use redis::AsyncCommands;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Liveness probe.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Writes `value` under `key`, expiring after `ttl_secs`.
    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), StoreError>;
}

/// Redis-backed store. Connections are opened per operation, so the service
/// starts even while Redis is down and reports it through `/health`.
#[derive(Clone)]
pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    pub fn open(redis_url: &str) -> Result<Self, StoreError> {
        Ok(Self {
            client: redis::Client::open(redis_url)?,
        })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let reply = redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await?;
        debug!("Redis PING -> {reply}");
        Ok(())
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set_ex::<_, _, ()>(key, value, ttl_secs).await?;
        Ok(())
    }
}

#[cfg(test)]
pub use memory::{connection_refused, MemoryStore};


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_rejects_malformed_url() {
        assert!(RedisStore::open("not a url").is_err());
    }

    #[test]
    fn test_open_does_not_connect() {
        // Nothing listens on this port; opening must still succeed.
        assert!(RedisStore::open("redis://127.0.0.1:1").is_ok());
    }

    #[tokio::test]
    async fn test_memory_store_records_value_and_ttl() {
        let store = MemoryStore::default();
        store.set_ex("k", "v", 60).await.unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        assert_eq!(store.ttl("k"), Some(60));
    }

    #[tokio::test]
    async fn test_unreachable_memory_store_fails() {
        let store = MemoryStore::unreachable();
        assert!(store.ping().await.is_err());
        assert!(store.set_ex("k", "v", 1).await.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_store_reports_a_redis_error() {
        let err = MemoryStore::unreachable().ping().await.unwrap_err();
        assert!(matches!(err, StoreError::Redis(_)));
        assert!(err.to_string().contains("connection refused"));
    }
}
