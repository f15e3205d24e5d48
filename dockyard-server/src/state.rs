//! Application state shared across handlers
//!
//! Stores are built once at startup and injected here; handlers never
//! reach for a global client.

use std::sync::Arc;

use crate::store::{KvStore, UserStore};

/// State for the users service
#[derive(Clone)]
pub struct UsersState {
    inner: Arc<UsersStateInner>,
}

struct UsersStateInner {
    app_name: String,
    store: Arc<dyn UserStore>,
}

impl UsersState {
    pub fn new(app_name: impl Into<String>, store: Arc<dyn UserStore>) -> Self {
        Self {
            inner: Arc::new(UsersStateInner {
                app_name: app_name.into(),
                store,
            }),
        }
    }

    /// Display name reported in every response
    pub fn app_name(&self) -> &str {
        &self.inner.app_name
    }

    pub fn store(&self) -> &dyn UserStore {
        self.inner.store.as_ref()
    }
}

/// State for the message service
#[derive(Clone)]
pub struct MessageState {
    store: Arc<dyn KvStore>,
}

impl MessageState {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn KvStore {
        self.store.as_ref()
    }
}
