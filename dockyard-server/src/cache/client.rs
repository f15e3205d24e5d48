//! Redis-backed `KvStore`
//!
//! One multiplexed connection is opened at startup and shared by every
//! request; `ConnectionManager` clones are cheap handles onto it and
//! reconnect on their own after the server goes away.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::store::{KvStore, StoreError};

/// Redis client holding a single long-lived connection
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}

impl RedisStore {
    /// Open the connection and confirm it with a PING.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the server cannot be
    /// reached. Callers treat this as fatal.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = RedisStore::connect("redis://redis:6379").await?;
    /// ```
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;
        let store = Self { conn };
        store.ping().await?;

        tracing::info!(url = %redis_url, "Connected to Redis");
        Ok(store)
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}
