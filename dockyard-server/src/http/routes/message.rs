//! Message endpoint - write-then-read round trip against the cache

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::{ApiError, StoreResultExt};
use crate::state::MessageState;

/// Key overwritten on every request
pub const MESSAGE_KEY: &str = "message";

/// Value written under `MESSAGE_KEY`
pub const MESSAGE_VALUE: &str = "Hello from Redis ?  !";

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: Option<String>,
}

/// GET / - set the message, read it back
async fn round_trip(State(state): State<MessageState>) -> Result<Json<MessageResponse>, ApiError> {
    let store = state.store();
    store
        .set(MESSAGE_KEY, MESSAGE_VALUE)
        .await
        .context_with_details("Redis operation failed")?;
    let message = store
        .get(MESSAGE_KEY)
        .await
        .context_with_details("Redis operation failed")?;

    Ok(Json(MessageResponse { message }))
}

/// Message routes
pub fn router() -> Router<MessageState> {
    Router::new().route("/", get(round_trip))
}
