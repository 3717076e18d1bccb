//! Friends services - the caller's friend list and suggestions

use crate::core::{AppError, AppState};
use crate::dtos::{CreateFriendshipDTO, FriendshipDTO, UserDTO};
use crate::entities::User;
use crate::repositories::{Create, Delete, Read};
use axum::{
    Extension,
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// GET /api/friends/suggest: people the caller shared a lunch with but
/// has not added yet.
#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn suggest_friends(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<UserDTO>>, AppError> {
    let suggestions = state.friendship.suggest_friends(&current_user.id).await?;
    info!("Returning {} friend suggestions", suggestions.len());
    Ok(Json(suggestions.into_iter().map(UserDTO::from).collect()))
}

/// POST /api/friends. Friendships are directed and owned: the caller can
/// only add entries to their own list, cannot befriend themselves, and
/// adding the same person twice is rejected.
#[instrument(skip(state, current_user, body), fields(user_id = %current_user.id, friend_id = %body.friend_id))]
pub async fn add_friend(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<CreateFriendshipDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Adding friend");
    if body.user_id != current_user.id {
        warn!(
            "User {} tried to edit the friend list of {}",
            current_user.id, body.user_id
        );
        return Err(AppError::unauthorized(
            "Friends can only be added to your own list",
        ));
    }

    if body.friend_id == current_user.id {
        return Err(AppError::bad_request("You cannot add yourself as a friend"));
    }

    state
        .user
        .read(&body.friend_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    if state
        .friendship
        .exists_pair(&body.user_id, &body.friend_id)
        .await?
    {
        return Err(AppError::bad_request("Already friends with this user"));
    }

    let friendship = state.friendship.create(&body).await?;
    info!("Friendship {} created", friendship.id);
    Ok((StatusCode::CREATED, Json(FriendshipDTO::from(friendship))))
}

/// DELETE /api/friends/{friendship_id}. Only the list owner can remove.
#[instrument(skip(state, current_user), fields(user_id = %current_user.id, friendship_id = %friendship_id))]
pub async fn remove_friend(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(friendship_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let friendship = state
        .friendship
        .read(&friendship_id)
        .await?
        .ok_or_else(|| AppError::not_found("Friendship not found"))?;

    if friendship.user_id != current_user.id {
        warn!(
            "User {} tried to remove friendship {}",
            current_user.id, friendship_id
        );
        return Err(AppError::unauthorized(
            "Friends can only be removed from your own list",
        ));
    }

    state.friendship.delete(&friendship_id).await?;
    info!("Friendship {} removed", friendship_id);
    Ok(StatusCode::OK)
}
