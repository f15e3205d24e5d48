//! User endpoints and the users service welcome page

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::{ApiError, StoreResultExt};
use crate::http::extractors::{JsonBody, UserId};
use crate::models::{CreateUserRequest, NewUser, User};
use crate::state::UsersState;

/// Welcome response
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub get_all_users: &'static str,
    pub get_user_by_id: &'static str,
    pub create_user: &'static str,
}

/// User list response
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub app: String,
    pub count: usize,
    pub users: Vec<User>,
}

/// Single user response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub app: String,
    pub user: User,
}

/// Created user response
#[derive(Debug, Serialize)]
pub struct CreatedUserResponse {
    pub app: String,
    pub message: &'static str,
    pub user: User,
}

/// GET / - service name and the routes it offers
async fn welcome(State(state): State<UsersState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!("Welcome to {}!", state.app_name()),
        endpoints: Endpoints {
            get_all_users: "GET /users",
            get_user_by_id: "GET /users/:id",
            create_user: "POST /users",
        },
    })
}

/// GET /users - every user, ascending by id
async fn list_users(State(state): State<UsersState>) -> Result<Json<UserListResponse>, ApiError> {
    let users = state.store().list().await.context("Failed to fetch users")?;

    Ok(Json(UserListResponse {
        app: state.app_name().to_owned(),
        count: users.len(),
        users,
    }))
}

/// GET /users/{id} - a single user
async fn get_user(
    State(state): State<UsersState>,
    UserId(id): UserId,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.store().get(id).await.context("Failed to fetch user")?;

    Ok(Json(UserResponse {
        app: state.app_name().to_owned(),
        user,
    }))
}

/// POST /users - create a user from `{name, email}`
async fn create_user(
    State(state): State<UsersState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreatedUserResponse>), ApiError> {
    let new_user = NewUser::try_from(req)?;
    let user = state
        .store()
        .create(new_user)
        .await
        .context("Failed to create user")?;

    tracing::info!(app = %state.app_name(), user_id = user.id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedUserResponse {
            app: state.app_name().to_owned(),
            message: "User created successfully",
            user,
        }),
    ))
}

/// User routes
pub fn router() -> Router<UsersState> {
    Router::new()
        .route("/", get(welcome))
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
}
