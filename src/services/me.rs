//! Me services - the caller's own lunches, friends and open invitations

use crate::core::{AppError, AppState};
use crate::dtos::{LunchDTO, PendingInvitationDTO, UserDTO};
use crate::entities::User;
use crate::repositories::Read;
use crate::services::lunch::enrich_lunch;
use axum::{
    Extension,
    extract::{Json, State},
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// GET /api/me/lunches: lunches the caller hosts plus lunches they
/// accepted an invitation to, each appearing once.
#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn my_lunches(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<LunchDTO>>, AppError> {
    debug!("Listing the caller's lunches");
    let mut lunches = state.lunch.find_hosted_by(&current_user.id).await?;
    lunches.extend(state.lunch.find_accepted_by(&current_user.id).await?);

    // Hosting and accepting your own invitation must not duplicate a row.
    let mut seen = HashSet::new();
    lunches.retain(|lunch| seen.insert(lunch.id));
    lunches.sort_by_key(|lunch| lunch.date);

    let mut payload = Vec::with_capacity(lunches.len());
    for lunch in lunches {
        payload.push(enrich_lunch(&state, lunch).await?);
    }

    info!("Returning {} lunches", payload.len());
    Ok(Json(payload))
}

/// GET /api/me/friends
#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn my_friends(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<UserDTO>>, AppError> {
    let friends = state.friendship.find_friends_of(&current_user.id).await?;
    info!("Returning {} friends", friends.len());
    Ok(Json(friends.into_iter().map(UserDTO::from).collect()))
}

/// GET /api/me/invitations: invitations the caller has not answered yet,
/// each carrying the full lunch it belongs to.
#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn my_invitations(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<PendingInvitationDTO>>, AppError> {
    debug!("Listing unanswered invitations");
    let pending = state
        .invitation
        .find_unanswered_by_user(&current_user.id)
        .await?;

    let mut payload = Vec::with_capacity(pending.len());
    for invitation in pending {
        let lunch = state
            .lunch
            .read(&invitation.lunch_id)
            .await?
            .ok_or_else(|| AppError::internal_server_error("Invitation points at a missing lunch"))?;

        payload.push(PendingInvitationDTO {
            id: invitation.id,
            response: invitation.response,
            lunch: enrich_lunch(&state, lunch).await?,
        });
    }

    info!("Returning {} pending invitations", payload.len());
    Ok(Json(payload))
}
