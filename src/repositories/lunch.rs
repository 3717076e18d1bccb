//! LunchRepository - lunches and their lifecycle

use super::Read;
use crate::entities::Lunch;
use sqlx::{Error, SqlitePool};
use uuid::Uuid;

const LUNCH_COLUMNS: &str = "id, host_id, location_id, date, notes, state";

pub struct LunchRepository {
    connection_pool: SqlitePool,
}

impl LunchRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    pub async fn exists(&self, id: &Uuid) -> Result<bool, Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM lunches WHERE id = ?1")
            .bind(id)
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn insert(&self, lunch: &Lunch) -> Result<(), Error> {
        sqlx::query(
            "INSERT INTO lunches (id, host_id, location_id, date, notes, state) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(lunch.id)
        .bind(lunch.host_id)
        .bind(lunch.location_id)
        .bind(lunch.date)
        .bind(&lunch.notes)
        .bind(lunch.state)
        .execute(&self.connection_pool)
        .await?;

        Ok(())
    }

    /// Canceling is the only mutation a lunch supports: the row and its
    /// invitations go away together.
    pub async fn delete_with_invitations(&self, id: &Uuid) -> Result<(), Error> {
        let mut tx = self.connection_pool.begin().await?;

        sqlx::query("DELETE FROM invitations WHERE lunch_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM lunches WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Lunches the user hosts.
    pub async fn find_hosted_by(&self, host_id: &Uuid) -> Result<Vec<Lunch>, Error> {
        let query = format!(
            "SELECT {LUNCH_COLUMNS} FROM lunches WHERE host_id = ?1 ORDER BY date"
        );
        sqlx::query_as::<_, Lunch>(&query)
            .bind(host_id)
            .fetch_all(&self.connection_pool)
            .await
    }

    /// Lunches the user was invited to and accepted.
    pub async fn find_accepted_by(&self, user_id: &Uuid) -> Result<Vec<Lunch>, Error> {
        sqlx::query_as::<_, Lunch>(
            "SELECT l.id, l.host_id, l.location_id, l.date, l.notes, l.state \
             FROM lunches l \
             JOIN invitations i ON i.lunch_id = l.id \
             WHERE i.user_id = ?1 AND i.response = 'ACCEPTED' \
             ORDER BY l.date",
        )
        .bind(user_id)
        .fetch_all(&self.connection_pool)
        .await
    }
}

impl Read<Lunch, Uuid> for LunchRepository {
    async fn read(&self, id: &Uuid) -> Result<Option<Lunch>, Error> {
        let query = format!("SELECT {LUNCH_COLUMNS} FROM lunches WHERE id = ?1");
        sqlx::query_as::<_, Lunch>(&query)
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
