//! Lunch services - creating and canceling lunches

use crate::core::{AppError, AppState};
use crate::dtos::{CreateLunchDTO, LunchDTO, LunchInvitationDTO, UserDTO};
use crate::entities::{Invitation, InviteResponseKind, Lunch, LunchState, Restaurant, User};
use crate::repositories::Read;
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

/// POST /api/lunch. The client generates every id up front, so a resubmit
/// of an already stored lunch is a 400, not a duplicate. Only the caller
/// can host. The location is persisted as a side effect and invitation
/// responses are forced to `None` regardless of what was sent.
#[instrument(skip(state, current_user, body), fields(user_id = %current_user.id, lunch_id = %body.id))]
pub async fn create_lunch(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<CreateLunchDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating lunch");
    body.validate()?;

    if body.host_id != current_user.id {
        warn!("User {} tried to host for {}", current_user.id, body.host_id);
        return Err(AppError::forbidden("Lunches can only be hosted by the caller"));
    }

    if state.lunch.exists(&body.id).await? {
        return Err(AppError::bad_request("A lunch with this id already exists"));
    }

    let location = Restaurant::from(body.location);
    state.restaurant.upsert(&location).await?;

    let lunch = Lunch {
        id: body.id,
        host_id: current_user.id,
        location_id: location.id,
        date: body.date,
        notes: body.notes,
        state: LunchState::Open,
    };
    state.lunch.insert(&lunch).await?;

    let invitations: Vec<Invitation> = body
        .invitations
        .iter()
        .map(|invite| Invitation {
            id: invite.id,
            lunch_id: lunch.id,
            user_id: invite.user_id,
            response: InviteResponseKind::None,
        })
        .collect();
    state.invitation.create_many(&invitations).await?;

    info!(
        "Lunch {} created with {} invitations",
        lunch.id,
        invitations.len()
    );
    let dto = enrich_lunch(&state, lunch).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

/// DELETE /api/lunch/{lunch_id}. Host only; invitations go with it.
#[instrument(skip(state, current_user), fields(user_id = %current_user.id, lunch_id = %lunch_id))]
pub async fn cancel_lunch(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(lunch_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let lunch = state
        .lunch
        .read(&lunch_id)
        .await?
        .ok_or_else(|| AppError::not_found("Lunch not found"))?;

    if lunch.host_id != current_user.id {
        warn!("User {} tried to cancel lunch {}", current_user.id, lunch_id);
        return Err(AppError::forbidden("Only the host can cancel a lunch"));
    }

    state.lunch.delete_with_invitations(&lunch_id).await?;
    info!("Lunch {} canceled", lunch_id);
    Ok(StatusCode::OK)
}

/// Resolves a lunch row into its full payload: host and location looked
/// up, invitations listed with each invitee resolved.
pub(crate) async fn enrich_lunch(state: &AppState, lunch: Lunch) -> Result<LunchDTO, AppError> {
    let host = state
        .user
        .read(&lunch.host_id)
        .await?
        .ok_or_else(|| AppError::internal_server_error("Lunch host no longer exists"))?;

    let location = state
        .restaurant
        .read(&lunch.location_id)
        .await?
        .ok_or_else(|| AppError::internal_server_error("Lunch location no longer exists"))?;

    let mut invitations = Vec::new();
    for invitation in state.invitation.find_by_lunch(&lunch.id).await? {
        let invitee = state
            .user
            .read(&invitation.user_id)
            .await?
            .ok_or_else(|| AppError::internal_server_error("Invitee no longer exists"))?;

        invitations.push(LunchInvitationDTO {
            id: invitation.id,
            user: UserDTO::from(invitee),
            response: invitation.response,
        });
    }

    Ok(LunchDTO::from_parts(
        lunch,
        UserDTO::from(host),
        location.into(),
        invitations,
    ))
}
