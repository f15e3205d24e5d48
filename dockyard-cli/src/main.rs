//! dockyard CLI - runs one of the dockyard HTTP services
//!
//! - `dockyard users`: users API over a (possibly shared) Postgres database
//! - `dockyard message`: message API over Redis
//!
//! Every flag can also come from the environment or a `.env` file in the
//! working directory.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "dockyard",
    author,
    version,
    about = "Small JSON services over shared Postgres and Redis backends"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the users service (Postgres-backed)
    Users(commands::UsersArgs),

    /// Run the message service (Redis-backed)
    Message(commands::MessageArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is normal; only the environment matters then
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Users(args) => commands::run_users(args).await?,
        Commands::Message(args) => commands::run_message(args).await?,
    }
    Ok(())
}
