//! Group and membership DTOs

use crate::entities::{Group, GroupMembership};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateGroupDTO {
    pub id: Uuid,
    #[validate(length(min = 1, max = 64, message = "group name must be 1-64 characters"))]
    pub name: String,
    pub owner_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GroupDTO {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
}

impl From<Group> for GroupDTO {
    fn from(value: Group) -> Self {
        Self {
            id: value.id,
            name: value.name,
            owner_id: value.owner_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateGroupMembershipDTO {
    pub id: Uuid,
    pub group_id: Uuid,
    pub member_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GroupMembershipDTO {
    pub id: Uuid,
    pub group_id: Uuid,
    pub member_id: Uuid,
}

impl From<GroupMembership> for GroupMembershipDTO {
    fn from(value: GroupMembership) -> Self {
        Self {
            id: value.id,
            group_id: value.group_id,
            member_id: value.member_id,
        }
    }
}
