//! Users controller.

use crate::{responses::ApiResult, state::AppState};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::debug;
use userdir_core::{User, UserId};

/// Creates the users router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user))
}

/// List all users from the current snapshot.
async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    debug!("List users request");

    let snapshot = state.directory.list_users().await?;
    Ok(Json(snapshot.as_ref().clone()))
}

/// Get one user by id, enriched with posts.
async fn get_user(State(state): State<AppState>, Path(id): Path<UserId>) -> ApiResult<User> {
    debug!("Get user request: {}", id);

    let user = state.directory.get_user(id).await?;
    Ok(Json(user))
}
