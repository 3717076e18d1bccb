//! GroupMembershipRepository - join rows between groups and members

use super::{Create, Delete, Read};
use crate::dtos::CreateGroupMembershipDTO;
use crate::entities::GroupMembership;
use sqlx::{Error, SqlitePool};
use uuid::Uuid;

pub struct GroupMembershipRepository {
    connection_pool: SqlitePool,
}

impl GroupMembershipRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// True if the user is already a member of the group.
    pub async fn exists_pair(&self, group_id: &Uuid, member_id: &Uuid) -> Result<bool, Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM group_memberships WHERE group_id = ?1 AND member_id = ?2",
        )
        .bind(group_id)
        .bind(member_id)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(count > 0)
    }
}

impl Create<GroupMembership, CreateGroupMembershipDTO> for GroupMembershipRepository {
    async fn create(&self, data: &CreateGroupMembershipDTO) -> Result<GroupMembership, Error> {
        sqlx::query(
            "INSERT INTO group_memberships (id, group_id, member_id) VALUES (?1, ?2, ?3)",
        )
        .bind(data.id)
        .bind(data.group_id)
        .bind(data.member_id)
        .execute(&self.connection_pool)
        .await?;

        Ok(GroupMembership {
            id: data.id,
            group_id: data.group_id,
            member_id: data.member_id,
        })
    }
}

impl Read<GroupMembership, Uuid> for GroupMembershipRepository {
    async fn read(&self, id: &Uuid) -> Result<Option<GroupMembership>, Error> {
        sqlx::query_as::<_, GroupMembership>(
            "SELECT id, group_id, member_id FROM group_memberships WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}

impl Delete<Uuid> for GroupMembershipRepository {
    async fn delete(&self, id: &Uuid) -> Result<(), Error> {
        sqlx::query("DELETE FROM group_memberships WHERE id = ?1")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
