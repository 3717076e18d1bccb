//! Invitation DTOs

use crate::dtos::LunchDTO;
use crate::entities::InviteResponseKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of POST /api/invitation: the invitee's accept/decline.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RespondInvitationDTO {
    pub id: Uuid,
    pub response: InviteResponseKind,
}

/// An unanswered invitation as listed by GET /api/me/invitations,
/// enriched with the lunch it belongs to.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PendingInvitationDTO {
    pub id: Uuid,
    pub response: InviteResponseKind,
    pub lunch: LunchDTO,
}
