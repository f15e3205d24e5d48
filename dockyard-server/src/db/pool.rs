//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool connects
//! lazily: a service starts without a reachable database and fails
//! individual requests until it comes up.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::DatabaseSettings;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a lazily-connecting PostgreSQL pool from a connection URL.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed. No connection is
/// attempted here.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://myuser:mypassword@db/mydatabase", DEFAULT_MAX_CONNECTIONS)?;
/// ```
pub fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let options: PgConnectOptions = database_url.parse()?;
    Ok(create_pool_with_options(options, max_connections))
}

/// Create a lazily-connecting pool from individual settings.
pub fn create_pool_from_settings(settings: &DatabaseSettings, max_connections: u32) -> PgPool {
    create_pool_with_options(settings.connect_options(), max_connections)
}

/// Create a lazily-connecting pool with custom options.
///
/// # Arguments
///
/// * `options` - Postgres connect options
/// * `max_connections` - Maximum number of connections in the pool
pub fn create_pool_with_options(options: PgConnectOptions, max_connections: u32) -> PgPool {
    PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_lazy_with(options)
}
