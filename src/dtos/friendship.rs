//! Friendship DTOs

use crate::entities::Friendship;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of POST /api/friends. The id is client-generated, like the
/// original Guid keys.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateFriendshipDTO {
    pub id: Uuid,
    pub user_id: Uuid,
    pub friend_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FriendshipDTO {
    pub id: Uuid,
    pub user_id: Uuid,
    pub friend_id: Uuid,
}

impl From<Friendship> for FriendshipDTO {
    fn from(value: Friendship) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            friend_id: value.friend_id,
        }
    }
}
