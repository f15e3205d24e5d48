//! Database layer - connection pool and repositories
//!
//! - Connection pool with a fixed upper bound; excess requests queue in the pool
//! - Positional binds only, never string-built SQL
//! - Constraints (if any) live in the schema, not here

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_from_settings, create_pool_with_options};
pub use repos::UserRepo;
