//! HTTP server layer
//!
//! Axum routers with:
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::{ApiError, StoreResultExt};
pub use server::{
    message_app, run_message_server, run_users_server, users_app, ServerConfig, ServerError,
};
