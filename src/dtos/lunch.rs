//! Lunch DTOs

use crate::dtos::{RestaurantDTO, UserDTO};
use crate::entities::{InviteResponseKind, Lunch, LunchState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// One invitee on a lunch being created. The response is forced to
/// `None` server side regardless of what the client sends.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LunchInviteDTO {
    pub id: Uuid,
    pub user_id: Uuid,
}

/// Body of POST /api/lunch. All ids come from the client; the location
/// is a full restaurant record picked from a previous search.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateLunchDTO {
    pub id: Uuid,
    pub host_id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(default)]
    #[validate(length(max = 500, message = "notes are limited to 500 characters"))]
    pub notes: String,
    pub location: RestaurantDTO,
    #[serde(default)]
    pub invitations: Vec<LunchInviteDTO>,
}

/// One invitation on an enriched lunch, with the invitee resolved.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LunchInvitationDTO {
    pub id: Uuid,
    pub user: UserDTO,
    pub response: InviteResponseKind,
}

/// Lunch as returned by the read endpoints: host, location and
/// invitations resolved in one payload.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LunchDTO {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub notes: String,
    pub state: LunchState,
    pub host: UserDTO,
    pub location: RestaurantDTO,
    pub invitations: Vec<LunchInvitationDTO>,
}

impl LunchDTO {
    pub fn from_parts(
        lunch: Lunch,
        host: UserDTO,
        location: RestaurantDTO,
        invitations: Vec<LunchInvitationDTO>,
    ) -> Self {
        Self {
            id: lunch.id,
            date: lunch.date,
            notes: lunch.notes,
            state: lunch.state,
            host,
            location,
            invitations,
        }
    }
}
