//! UserRepository - user rows and their stored app tokens

use super::Read;
use crate::entities::{AuthProviderKind, User};
use chrono::{DateTime, Utc};
use sqlx::{Error, SqlitePool};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, name, photo_url, provider_kind, provider_id, \
     authorization_token, authorization_token_expiration";

pub struct UserRepository {
    connection_pool: SqlitePool,
}

impl UserRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Find a user by their third-party identity. `(provider_kind,
    /// provider_id)` is unique, so at most one row matches.
    pub async fn find_by_provider(
        &self,
        provider_kind: AuthProviderKind,
        provider_id: &str,
    ) -> Result<Option<User>, Error> {
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE provider_kind = ?1 AND provider_id = ?2"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(provider_kind)
            .bind(provider_id)
            .fetch_optional(&self.connection_pool)
            .await
    }

    /// Substring search on the display name, capped at 20 results.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<User>, Error> {
        let pattern = format!("%{}%", name);
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE name LIKE ?1 ORDER BY name LIMIT 20"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(pattern)
            .fetch_all(&self.connection_pool)
            .await
    }

    /// Insert a freshly registered user.
    pub async fn insert(&self, user: &User) -> Result<(), Error> {
        sqlx::query(
            "INSERT INTO users (id, name, photo_url, provider_kind, provider_id, \
             authorization_token, authorization_token_expiration) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.photo_url)
        .bind(user.provider_kind)
        .bind(&user.provider_id)
        .bind(&user.authorization_token)
        .bind(user.authorization_token_expiration)
        .execute(&self.connection_pool)
        .await?;

        Ok(())
    }

    /// Refresh name and photo with whatever the provider reported at login.
    pub async fn update_profile(
        &self,
        id: &Uuid,
        name: &str,
        photo_url: &Option<String>,
    ) -> Result<(), Error> {
        sqlx::query("UPDATE users SET name = ?1, photo_url = ?2 WHERE id = ?3")
            .bind(name)
            .bind(photo_url)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }

    /// Attach a newly issued app token and its expiry to the user row.
    pub async fn store_token(
        &self,
        id: &Uuid,
        token: &str,
        expiration: DateTime<Utc>,
    ) -> Result<(), Error> {
        sqlx::query(
            "UPDATE users SET authorization_token = ?1, \
             authorization_token_expiration = ?2 WHERE id = ?3",
        )
        .bind(token)
        .bind(expiration)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        Ok(())
    }

    /// Logout: drop the stored token and expiry.
    pub async fn clear_token(&self, id: &Uuid) -> Result<(), Error> {
        sqlx::query(
            "UPDATE users SET authorization_token = NULL, \
             authorization_token_expiration = NULL WHERE id = ?1",
        )
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        Ok(())
    }
}

impl Read<User, Uuid> for UserRepository {
    async fn read(&self, id: &Uuid) -> Result<Option<User>, Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
