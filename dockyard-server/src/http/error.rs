//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Store failures are logged here, once, at the boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::ValidationError;
use crate::store::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Backing store failed (500, logged)
    ///
    /// `message` is what the client sees. The underlying error is only
    /// echoed back when `expose_details` is set.
    Store {
        message: &'static str,
        source: StoreError,
        expose_details: bool,
    },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(e) => json!({ "error": e.to_string() }),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "Not found");
                json!({ "error": format!("{} not found", capitalize(resource)) })
            }
            Self::Store {
                message,
                source,
                expose_details,
            } => {
                tracing::error!(error = %source, "{}", message);
                if expose_details {
                    json!({ "error": message, "details": source.to_string() })
                } else {
                    json!({ "error": message })
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

/// Attach a client-facing message to a store result.
///
/// `NotFound` passes through as a 404; every other store error becomes
/// a 500 carrying `message`.
pub trait StoreResultExt<T> {
    fn context(self, message: &'static str) -> Result<T, ApiError>;

    /// Like `context`, but the response also carries the store error text.
    fn context_with_details(self, message: &'static str) -> Result<T, ApiError>;
}

impl<T> StoreResultExt<T> for Result<T, StoreError> {
    fn context(self, message: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| store_error(e, message, false))
    }

    fn context_with_details(self, message: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| store_error(e, message, true))
    }
}

fn store_error(e: StoreError, message: &'static str, expose_details: bool) -> ApiError {
    match e {
        StoreError::NotFound { resource, id } => ApiError::NotFound { resource, id },
        source => ApiError::Store {
            message,
            source,
            expose_details,
        },
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
