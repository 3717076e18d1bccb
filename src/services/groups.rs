//! Groups services - owned groups and their memberships

use crate::core::{AppError, AppState};
use crate::dtos::{CreateGroupDTO, CreateGroupMembershipDTO, GroupDTO, GroupMembershipDTO};
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
use validator::Validate;

/// POST /api/groups. The caller becomes the owner; a resubmitted id is
/// rejected rather than overwritten.
#[instrument(skip(state, current_user, body), fields(user_id = %current_user.id, group_id = %body.id))]
pub async fn create_group(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<CreateGroupDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating group");
    body.validate()?;

    if body.owner_id != current_user.id {
        warn!(
            "User {} tried to create a group owned by {}",
            current_user.id, body.owner_id
        );
        return Err(AppError::unauthorized("Groups can only be created for yourself"));
    }

    if state.group.exists(&body.id).await? {
        return Err(AppError::bad_request("A group with this id already exists"));
    }

    let group = state.group.create(&body).await?;
    info!("Group {} created", group.id);
    Ok((StatusCode::CREATED, Json(GroupDTO::from(group))))
}

/// DELETE /api/groups/{group_id}. Owner only; memberships go with it.
#[instrument(skip(state, current_user), fields(user_id = %current_user.id, group_id = %group_id))]
pub async fn delete_group(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(group_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let group = state
        .group
        .read(&group_id)
        .await?
        .ok_or_else(|| AppError::not_found("Group not found"))?;

    if group.owner_id != current_user.id {
        warn!("User {} tried to delete group {}", current_user.id, group_id);
        return Err(AppError::unauthorized("Only the owner can delete a group"));
    }

    state.group.delete(&group_id).await?;
    info!("Group {} deleted", group_id);
    Ok(StatusCode::OK)
}

/// POST /api/groups/membership. The owner can add anyone; everyone else
/// can only add themselves. Duplicate memberships are rejected.
#[instrument(skip(state, current_user, body), fields(user_id = %current_user.id, group_id = %body.group_id))]
pub async fn join_group(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<CreateGroupMembershipDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Adding group membership");
    let group = state
        .group
        .read(&body.group_id)
        .await?
        .ok_or_else(|| AppError::not_found("Group not found"))?;

    if group.owner_id != current_user.id && body.member_id != current_user.id {
        warn!(
            "User {} tried to add {} to group {}",
            current_user.id, body.member_id, body.group_id
        );
        return Err(AppError::unauthorized(
            "Only the group owner can add other members",
        ));
    }

    state
        .user
        .read(&body.member_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    if state
        .membership
        .exists_pair(&body.group_id, &body.member_id)
        .await?
    {
        return Err(AppError::bad_request("Already a member of this group"));
    }

    let membership = state.membership.create(&body).await?;
    info!(
        "User {} joined group {} as membership {}",
        membership.member_id, membership.group_id, membership.id
    );
    Ok((StatusCode::CREATED, Json(GroupMembershipDTO::from(membership))))
}

/// DELETE /api/groups/membership/{membership_id}. The member can leave on
/// their own; the owner can remove anyone.
#[instrument(skip(state, current_user), fields(user_id = %current_user.id, membership_id = %membership_id))]
pub async fn leave_group(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(membership_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let membership = state
        .membership
        .read(&membership_id)
        .await?
        .ok_or_else(|| AppError::not_found("Membership not found"))?;

    let group = state
        .group
        .read(&membership.group_id)
        .await?
        .ok_or_else(|| AppError::not_found("Group not found"))?;

    if membership.member_id != current_user.id && group.owner_id != current_user.id {
        warn!(
            "User {} tried to remove membership {}",
            current_user.id, membership_id
        );
        return Err(AppError::unauthorized(
            "Only the member or the group owner can remove a membership",
        ));
    }

    state.membership.delete(&membership_id).await?;
    info!("Membership {} removed", membership_id);
    Ok(StatusCode::OK)
}
