//! dockyard-server: small JSON services over shared backing stores
//!
//! Two services live here:
//! - users: list/get/create users in a Postgres table
//! - message: write-then-read a fixed key in Redis
//!
//! Stores are built once at startup and passed into router state.

pub mod cache;
pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;
pub mod store;

pub use cache::RedisStore;
pub use db::repos::PgUserStore;
pub use state::{MessageState, UsersState};
pub use store::{KvStore, StoreError, UserStore};
