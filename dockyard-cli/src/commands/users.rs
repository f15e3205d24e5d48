//! Users service command
//!
//! Several instances may point at the same database; each differs only by
//! display name and bind address.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use dockyard_server::config::{app_name_or_default, DatabaseSettings};
use dockyard_server::db::{create_pool, create_pool_from_settings, pool::DEFAULT_MAX_CONNECTIONS};
use dockyard_server::http::{run_users_server, ServerConfig};
use dockyard_server::{PgUserStore, UsersState};

/// Arguments for the users command
#[derive(Parser, Debug)]
pub struct UsersArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Display name reported by this instance
    #[arg(long, env = "APP_NAME")]
    pub app_name: Option<String>,

    /// Full database URL (overrides the DB_* parts)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "postgres")]
    pub db_name: String,

    /// Maximum pooled connections; further requests wait for a free one
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl UsersArgs {
    fn database_settings(&self) -> DatabaseSettings {
        DatabaseSettings {
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            database: self.db_name.clone(),
        }
    }
}

/// Run the users service
pub async fn run_users(args: UsersArgs) -> Result<()> {
    let app_name = app_name_or_default(args.app_name.as_deref());

    // The pool is lazy: an unreachable database fails requests, not startup
    let pool = match args.database_url.as_deref() {
        Some(url) => {
            create_pool(url, args.max_connections).context("Invalid DATABASE_URL")?
        }
        None => {
            let settings = args.database_settings();
            tracing::info!(
                host = %settings.host,
                port = settings.port,
                database = %settings.database,
                "Using database settings"
            );
            create_pool_from_settings(&settings, args.max_connections)
        }
    };

    let state = UsersState::new(app_name, Arc::new(PgUserStore::new(pool)));
    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_users_server(state, config)
        .await
        .context("Server error")?;

    Ok(())
}
