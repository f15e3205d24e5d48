//! Health check endpoints
//!
//! Each service probes its own backing store. A failed probe answers
//! 500 with the failure text; the process keeps serving.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::{MessageState, UsersState};

/// Users service health response
#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub status: &'static str,
    pub app: String,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Message service health response
#[derive(Debug, Serialize)]
pub struct RedisHealth {
    pub status: &'static str,
    pub redis: &'static str,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /health - users service, probes Postgres with `SELECT 1`
async fn database_health(State(state): State<UsersState>) -> (StatusCode, Json<DatabaseHealth>) {
    let app = state.app_name().to_owned();
    match state.store().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(DatabaseHealth {
                status: "healthy",
                app,
                database: "connected",
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!(app = %app, error = %e, "Database health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DatabaseHealth {
                    status: "unhealthy",
                    app,
                    database: "disconnected",
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

/// GET /health - message service, probes Redis with PING
async fn redis_health(State(state): State<MessageState>) -> (StatusCode, Json<RedisHealth>) {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    match state.store().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(RedisHealth {
                status: "healthy",
                redis: "connected",
                timestamp,
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Redis health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RedisHealth {
                    status: "unhealthy",
                    redis: "disconnected",
                    timestamp,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

/// Health route for the users service
pub fn users_router() -> Router<UsersState> {
    Router::new().route("/health", get(database_health))
}

/// Health route for the message service
pub fn message_router() -> Router<MessageState> {
    Router::new().route("/health", get(redis_health))
}
