//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues parameterized queries.

pub mod users;

pub use users::{PgUserStore, UserRepo};
