//! HTTP Request Handlers
//!
//! Axum handlers for processing HTTP requests and responses.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    models::{
        requests::{HealthCheckResponse, ListUsersQuery, UserRequest},
        user::{User, UserId},
    },
    service::UserStore,
    utils::error::AppResult,
    VERSION,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_store: Arc<UserStore>,
}

impl AppState {
    pub fn new(user_store: UserStore) -> Self {
        Self {
            user_store: Arc::new(user_store),
        }
    }
}

/// Plain-text greeting served at the root
pub async fn root() -> &'static str {
    "Hello, World!"
}

/// List users one page at a time
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.user_store.list(query.page, query.page_size)?;
    Ok(Json(users))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<User>> {
    let user = state.user_store.get(user_id)?;
    Ok(Json(user))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(request) = payload?;
    let user = state.user_store.create(&request)?;
    let location = format!("/users/{}", user.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(user)))
}

/// Replace a user's name and email
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> AppResult<Json<User>> {
    let Json(request) = payload?;
    let user = state.user_store.update(user_id, &request)?;
    Ok(Json(user))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> AppResult<StatusCode> {
    state.user_store.delete(user_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint
pub async fn health_check(
    State(state): State<AppState>,
) -> AppResult<Json<HealthCheckResponse>> {
    let response = HealthCheckResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: VERSION.to_string(),
        users: state.user_store.len()?,
    };

    Ok(Json(response))
}
