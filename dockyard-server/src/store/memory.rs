//! In-memory stores (stand-ins for Postgres and Redis)
//!
//! Both carry a reachability switch so callers can simulate a severed
//! backing store: while unreachable every operation fails with
//! `StoreError::Unavailable` and no state changes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{KvStore, StoreError, UserStore};
use crate::models::{NewUser, User};

#[derive(Debug)]
struct Reachability(AtomicBool);

impl Default for Reachability {
    fn default() -> Self {
        Self(AtomicBool::new(true))
    }
}

impl Reachability {
    fn check(&self) -> Result<(), StoreError> {
        if self.0.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    fn set(&self, reachable: bool) {
        self.0.store(reachable, Ordering::SeqCst);
    }
}

#[derive(Debug, Default)]
struct UserTable {
    rows: Vec<User>,
    next_id: i32,
}

/// User store backed by a Vec. Clones share the same table, which is
/// how two service instances "share one database" in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    table: Arc<Mutex<UserTable>>,
    reachable: Arc<Reachability>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.set(reachable);
    }

    fn table(&self) -> Result<std::sync::MutexGuard<'_, UserTable>, StoreError> {
        self.table
            .lock()
            .map_err(|_| StoreError::Unavailable("user table lock poisoned".to_string()))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        self.reachable.check()?;
        // Rows are appended with increasing ids, so insertion order is id order.
        Ok(self.table()?.rows.clone())
    }

    async fn get(&self, id: i64) -> Result<User, StoreError> {
        self.reachable.check()?;
        self.table()?
            .rows
            .iter()
            .find(|u| i64::from(u.id) == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                resource: "user",
                id: id.to_string(),
            })
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        self.reachable.check()?;
        let mut table = self.table()?;
        let id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Unavailable("user id sequence exhausted".to_string()))?;
        table.next_id = id;
        let row = User {
            id,
            name: user.name().to_owned(),
            email: user.email().to_owned(),
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.reachable.check()
    }
}

/// Key-value store backed by a HashMap
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    data: Arc<Mutex<HashMap<String, String>>>,
    reachable: Arc<Reachability>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.set(reachable);
    }

    fn data(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.data
            .lock()
            .map_err(|_| StoreError::Unavailable("kv map lock poisoned".to_string()))
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.reachable.check()?;
        self.data()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.reachable.check()?;
        Ok(self.data()?.get(key).cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.reachable.check()
    }
}
