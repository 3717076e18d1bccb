//! GroupRepository - owner-owned named collections of users

use super::{Create, Delete, Read};
use crate::dtos::CreateGroupDTO;
use crate::entities::Group;
use sqlx::{Error, SqlitePool};
use uuid::Uuid;

pub struct GroupRepository {
    connection_pool: SqlitePool,
}

impl GroupRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    pub async fn exists(&self, id: &Uuid) -> Result<bool, Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM groups WHERE id = ?1")
            .bind(id)
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count > 0)
    }
}

impl Create<Group, CreateGroupDTO> for GroupRepository {
    async fn create(&self, data: &CreateGroupDTO) -> Result<Group, Error> {
        sqlx::query("INSERT INTO groups (id, name, owner_id) VALUES (?1, ?2, ?3)")
            .bind(data.id)
            .bind(&data.name)
            .bind(data.owner_id)
            .execute(&self.connection_pool)
            .await?;

        Ok(Group {
            id: data.id,
            name: data.name.clone(),
            owner_id: data.owner_id,
        })
    }
}

impl Read<Group, Uuid> for GroupRepository {
    async fn read(&self, id: &Uuid) -> Result<Option<Group>, Error> {
        sqlx::query_as::<_, Group>("SELECT id, name, owner_id FROM groups WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl Delete<Uuid> for GroupRepository {
    /// Memberships go with the group in one transaction.
    async fn delete(&self, id: &Uuid) -> Result<(), Error> {
        let mut tx = self.connection_pool.begin().await?;

        sqlx::query("DELETE FROM group_memberships WHERE group_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM groups WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
