//! Message service command
//!
//! Redis must answer before the listener binds; otherwise the command
//! fails and the process exits non-zero.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use dockyard_server::config::DEFAULT_REDIS_URL;
use dockyard_server::http::{run_message_server, ServerConfig};
use dockyard_server::{MessageState, RedisStore};

/// Arguments for the message command
#[derive(Parser, Debug)]
pub struct MessageArgs {
    /// Address to bind to (overrides --port)
    #[arg(long, short = 'b', env = "BIND")]
    pub bind: Option<SocketAddr>,

    /// Port to listen on all interfaces
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Redis connection URL
    #[arg(long, env = "REDIS_URL", default_value = DEFAULT_REDIS_URL)]
    pub redis_url: String,
}

impl MessageArgs {
    fn bind_addr(&self) -> SocketAddr {
        self.bind
            .unwrap_or_else(|| SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port))
    }
}

/// Run the message service
pub async fn run_message(args: MessageArgs) -> Result<()> {
    let store = RedisStore::connect(&args.redis_url)
        .await
        .with_context(|| format!("Failed to connect to Redis at {}", args.redis_url))?;

    let state = MessageState::new(Arc::new(store));
    let config = ServerConfig {
        bind_addr: args.bind_addr(),
    };

    run_message_server(state, config)
        .await
        .context("Server error")?;

    Ok(())
}
