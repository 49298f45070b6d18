//! HTTP API for the in-memory user store.
//!
//! Handlers borrow the shared [`UserStore`] through axum state and never
//! retain user records past a request.

mod error;
mod store;
mod user;

pub use error::{ApiError, ApiResult};
pub use store::UserStore;
pub use user::User;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use tracing::{debug, info};

async fn root() -> &'static str {
    "My Todo app"
}

async fn create_user(
    State(store): State<Arc<UserStore>>,
    payload: Result<Json<User>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let Json(user) = payload.map_err(|err| ApiError::bad_request(err.body_text()))?;
    if user.name.is_empty() {
        return Err(ApiError::bad_request("Name is required"));
    }

    let id = store.insert(user.clone()).await;
    info!("Created user {} ({})", id, user.name);
    Ok((StatusCode::CREATED, Json(user)))
}

async fn find_user_by_id(
    State(store): State<Arc<UserStore>>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let id = parse_user_id(&id)?;
    let user = store
        .get(id)
        .await
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    debug!("Found user {}", id);
    Ok(Json(user))
}

async fn delete_user(
    State(store): State<Arc<UserStore>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_user_id(&id)?;
    if !store.delete(id).await {
        return Err(ApiError::not_found("User not found"));
    }
    info!("Deleted user {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Parses a path segment as a user id. Ids are positive integers; anything
/// else is a client error with a fixed message.
fn parse_user_id(raw: &str) -> ApiResult<u64> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid user ID"))
}

/// Build the HTTP API router over the given store.
pub fn build_router(store: Arc<UserStore>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/users", post(create_user))
        .route("/users/{id}", get(find_user_by_id).delete(delete_user))
        .with_state(store)
}
