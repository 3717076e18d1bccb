//! Invitations services - recording accept/decline answers

use crate::core::{AppError, AppState};
use crate::dtos::RespondInvitationDTO;
use crate::entities::{InviteResponseKind, User};
use crate::repositories::Read;
use axum::{
    Extension,
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// POST /api/invitation. Only the invitee may answer, and the answer must
/// be a real one: resetting back to unanswered is not supported.
#[instrument(skip(state, current_user, body), fields(user_id = %current_user.id, invitation_id = %body.id))]
pub async fn respond_to_invitation(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<RespondInvitationDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Recording invitation response");
    if body.response == InviteResponseKind::None {
        return Err(AppError::bad_request(
            "An invitation can only be accepted or declined",
        ));
    }

    let invitation = state
        .invitation
        .read(&body.id)
        .await?
        .ok_or_else(|| AppError::not_found("Invitation not found"))?;

    if invitation.user_id != current_user.id {
        warn!(
            "User {} tried to answer invitation {} of {}",
            current_user.id, invitation.id, invitation.user_id
        );
        return Err(AppError::unauthorized(
            "Only the invitee can answer an invitation",
        ));
    }

    state
        .invitation
        .update_response(&invitation.id, body.response)
        .await?;

    info!("Invitation {} answered {:?}", invitation.id, body.response);
    Ok(StatusCode::OK)
}
