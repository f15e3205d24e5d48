//! Axum server setup
//!
//! Router assembly for both services plus a shared runner with:
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::state::{MessageState, UsersState};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}

/// Build the users service router.
pub fn users_app(state: UsersState) -> Router {
    Router::new()
        .merge(routes::users::router())
        .merge(routes::health::users_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the message service router.
pub fn message_app(state: MessageState) -> Router {
    Router::new()
        .merge(routes::message::router())
        .merge(routes::health::message_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the users service until shutdown.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url, DEFAULT_MAX_CONNECTIONS)?;
/// let state = UsersState::new("App 1", Arc::new(PgUserStore::new(pool)));
/// run_users_server(state, ServerConfig::default()).await?;
/// ```
pub async fn run_users_server(state: UsersState, config: ServerConfig) -> Result<(), ServerError> {
    tracing::info!(app = %state.app_name(), "Starting users service");
    serve(users_app(state), config).await
}

/// Run the message service until shutdown.
pub async fn run_message_server(
    state: MessageState,
    config: ServerConfig,
) -> Result<(), ServerError> {
    tracing::info!("Starting message service");
    serve(message_app(state), config).await
}

async fn serve(app: Router, config: ServerConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
