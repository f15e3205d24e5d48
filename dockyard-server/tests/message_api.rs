//! Message service behaviour through the full router

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use dockyard_server::http::message_app;
use dockyard_server::store::MemoryKvStore;
use dockyard_server::MessageState;

fn app(store: &MemoryKvStore) -> Router {
    message_app(MessageState::new(Arc::new(store.clone())))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("should read body");
    (status, serde_json::from_slice(&bytes).expect("body should be JSON"))
}

#[tokio::test]
async fn root_returns_the_same_message_every_time() {
    let app = app(&MemoryKvStore::new());

    for _ in 0..3 {
        let (status, body) = get(&app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Hello from Redis ?  !"}));
    }
}

#[tokio::test]
async fn root_fails_with_details_when_cache_is_down() {
    let store = MemoryKvStore::new();
    store.set_reachable(false);
    let app = app(&store);

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Redis operation failed");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn health_reports_connection_state() {
    let store = MemoryKvStore::new();
    let app = app(&store);

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["redis"], "connected");
    assert!(body["timestamp"].is_string());

    store.set_reachable(false);
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["redis"], "disconnected");
}
