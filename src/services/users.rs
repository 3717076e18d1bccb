//! Users services - looking up other users

use crate::core::{AppError, AppState};
use crate::dtos::{UserDTO, UserSearchQuery};
use crate::entities::User;
use axum::{
    Extension,
    extract::{Json, Query, State},
};
use std::sync::Arc;
use tracing::{info, instrument};

/// GET /api/users?name=... Substring search on display names, used when
/// inviting people who are not friends yet.
#[instrument(skip(state, current_user), fields(user_id = %current_user.id, name = %params.name))]
pub async fn search_users(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Query(params): Query<UserSearchQuery>,
) -> Result<Json<Vec<UserDTO>>, AppError> {
    if params.name.trim().is_empty() {
        return Err(AppError::bad_request("A search name is required"));
    }

    let users = state.user.search_by_name(&params.name).await?;
    info!("Found {} users matching search", users.len());
    Ok(Json(users.into_iter().map(UserDTO::from).collect()))
}
