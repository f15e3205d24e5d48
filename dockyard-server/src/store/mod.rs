//! Backing-store seams
//!
//! Handlers talk to a `UserStore` or a `KvStore` and never to a client
//! library directly. Production implementations live in `db` (Postgres)
//! and `cache` (Redis); `memory` holds in-process versions used by tests.

pub mod memory;

use async_trait::async_trait;

use crate::models::{NewUser, User};

pub use memory::{MemoryKvStore, MemoryUserStore};

/// Store error type
///
/// Communication failures are not classified further; only a missing
/// record is distinguished.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Postgres(#[from] sqlx::Error),

    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Relational user storage
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, ascending by id.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// A single user, or `StoreError::NotFound`.
    async fn get(&self, id: i64) -> Result<User, StoreError>;

    /// Insert and return the stored row with its generated id.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Liveness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// String key-value storage
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Unconditional overwrite, no expiry.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Liveness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}
