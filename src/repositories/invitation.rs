//! InvitationRepository - per-invitee responses to lunches

use super::Read;
use crate::entities::{Invitation, InviteResponseKind};
use sqlx::{Error, SqlitePool};
use uuid::Uuid;

const INVITATION_COLUMNS: &str = "id, lunch_id, user_id, response";

pub struct InvitationRepository {
    connection_pool: SqlitePool,
}

impl InvitationRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Insert all invitations of a new lunch in one transaction.
    pub async fn create_many(&self, invitations: &[Invitation]) -> Result<(), Error> {
        let mut tx = self.connection_pool.begin().await?;

        for invitation in invitations {
            sqlx::query(
                "INSERT INTO invitations (id, lunch_id, user_id, response) \
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(invitation.id)
            .bind(invitation.lunch_id)
            .bind(invitation.user_id)
            .bind(invitation.response)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Record the invitee's accept/decline.
    pub async fn update_response(
        &self,
        id: &Uuid,
        response: InviteResponseKind,
    ) -> Result<(), Error> {
        sqlx::query("UPDATE invitations SET response = ?1 WHERE id = ?2")
            .bind(response)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }

    /// Invitations the user has not answered yet.
    pub async fn find_unanswered_by_user(&self, user_id: &Uuid) -> Result<Vec<Invitation>, Error> {
        let query = format!(
            "SELECT {INVITATION_COLUMNS} FROM invitations \
             WHERE user_id = ?1 AND response = 'NONE'"
        );
        sqlx::query_as::<_, Invitation>(&query)
            .bind(user_id)
            .fetch_all(&self.connection_pool)
            .await
    }

    /// All invitations attached to a lunch.
    pub async fn find_by_lunch(&self, lunch_id: &Uuid) -> Result<Vec<Invitation>, Error> {
        let query = format!(
            "SELECT {INVITATION_COLUMNS} FROM invitations WHERE lunch_id = ?1"
        );
        sqlx::query_as::<_, Invitation>(&query)
            .bind(lunch_id)
            .fetch_all(&self.connection_pool)
            .await
    }
}

impl Read<Invitation, Uuid> for InvitationRepository {
    async fn read(&self, id: &Uuid) -> Result<Option<Invitation>, Error> {
        let query = format!("SELECT {INVITATION_COLUMNS} FROM invitations WHERE id = ?1");
        sqlx::query_as::<_, Invitation>(&query)
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
