//! Users service behaviour through the full router

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use dockyard_server::http::users_app;
use dockyard_server::store::MemoryUserStore;
use dockyard_server::UsersState;

fn app(name: &str, store: &MemoryUserStore) -> Router {
    users_app(UsersState::new(name, Arc::new(store.clone())))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("should read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn welcome_names_service() {
    let app = app("App 1", &MemoryUserStore::new());
    let (status, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to App 1!");
    assert_eq!(body["endpoints"]["getUserById"], "GET /users/:id");
}

#[tokio::test]
async fn create_then_fetch_alice() {
    let app = app("App 1", &MemoryUserStore::new());

    let (status, body) = send(
        &app,
        post_json("/users", json!({"name": "Alice", "email": "alice@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(
        body["user"],
        json!({"id": 1, "name": "Alice", "email": "alice@example.com"})
    );

    let id = body["user"]["id"].as_i64().expect("integer id");
    let (status, fetched) = send(&app, get(&format!("/users/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["app"], "App 1");
    assert_eq!(fetched["user"], body["user"]);
}

#[tokio::test]
async fn unknown_user_is_404() {
    let app = app("App 1", &MemoryUserStore::new());
    let (status, body) = send(&app, get("/users/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User not found"}));
}

#[tokio::test]
async fn non_integer_id_is_400() {
    let app = app("App 1", &MemoryUserStore::new());
    let (status, body) = send(&app, get("/users/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "id: must be an integer");
}

#[tokio::test]
async fn missing_fields_are_400_and_create_nothing() {
    let store = MemoryUserStore::new();
    let app = app("App 1", &store);

    for payload in [
        json!({"email": "alice@example.com"}),
        json!({"name": "Alice"}),
        json!({}),
        json!({"name": "", "email": "alice@example.com"}),
    ] {
        let (status, body) = send(&app, post_json("/users", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Name and email are required"}));
    }

    let (_, listing) = send(&app, get("/users")).await;
    assert_eq!(listing["count"], 0);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = app("App 1", &MemoryUserStore::new());
    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn listing_is_ordered_by_id() {
    let app = app("App 1", &MemoryUserStore::new());
    for (name, email) in [
        ("Carol", "c@example.com"),
        ("Alice", "a@example.com"),
        ("Bob", "b@example.com"),
    ] {
        let payload = json!({"name": name, "email": email});
        let (status, _) = send(&app, post_json("/users", payload)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, get("/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);

    let ids: Vec<i64> = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_i64().unwrap())
        .collect();
    assert!(ids.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn instances_sharing_a_store_see_each_others_writes() {
    let store = MemoryUserStore::new();
    let app_a = app("App 1", &store);
    let app_b = app("App 2", &store);

    let (status, created) = send(
        &app_a,
        post_json("/users", json!({"name": "Alice", "email": "alice@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["app"], "App 1");

    let (status, listing) = send(&app_b, get("/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["app"], "App 2");
    assert_eq!(listing["users"][0], created["user"]);
}

#[tokio::test]
async fn health_tracks_store_reachability() {
    let store = MemoryUserStore::new();
    let app = app("App 1", &store);

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "healthy", "app": "App 1", "database": "connected"})
    );

    store.set_reachable(false);
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"], "disconnected");
    assert!(body["error"].is_string());

    // Other routes degrade to 500 while the store is away
    let (status, body) = send(&app, get("/users")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch users"}));

    store.set_reachable(true);
    let (status, _) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn fetch_and_create_fail_with_500_while_store_is_down() {
    let store = MemoryUserStore::new();
    let app = app("App 1", &store);

    let (status, created) = send(
        &app,
        post_json("/users", json!({"name": "Alice", "email": "alice@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["user"]["id"].as_i64().unwrap();

    store.set_reachable(false);

    let (status, body) = send(&app, get(&format!("/users/{id}"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch user"}));

    let (status, body) = send(
        &app,
        post_json("/users", json!({"name": "Bob", "email": "bob@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to create user"}));

    store.set_reachable(true);
    let (status, listing) = send(&app, get("/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["count"], 1);
    assert_eq!(listing["users"][0]["name"], "Alice");
}
