//! FriendshipRepository - directed friend links between users

use super::{Create, Delete, Read};
use crate::dtos::CreateFriendshipDTO;
use crate::entities::{Friendship, User};
use sqlx::{Error, SqlitePool};
use uuid::Uuid;

pub struct FriendshipRepository {
    connection_pool: SqlitePool,
}

impl FriendshipRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// True if `user_id` already lists `friend_id` as a friend.
    pub async fn exists_pair(&self, user_id: &Uuid, friend_id: &Uuid) -> Result<bool, Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM friendships WHERE user_id = ?1 AND friend_id = ?2",
        )
        .bind(user_id)
        .bind(friend_id)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(count > 0)
    }

    /// The users `user_id` has added as friends.
    pub async fn find_friends_of(&self, user_id: &Uuid) -> Result<Vec<User>, Error> {
        sqlx::query_as::<_, User>(
            "SELECT u.id, u.name, u.photo_url, u.provider_kind, u.provider_id, \
             u.authorization_token, u.authorization_token_expiration \
             FROM users u \
             JOIN friendships f ON f.friend_id = u.id \
             WHERE f.user_id = ?1 \
             ORDER BY u.name",
        )
        .bind(user_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    /// Suggested friends: people who shared a lunch with the user (as
    /// fellow invitees, or invitees on lunches the user hosted) but are
    /// not yet on the friend list.
    pub async fn suggest_friends(&self, user_id: &Uuid) -> Result<Vec<User>, Error> {
        sqlx::query_as::<_, User>(
            "SELECT DISTINCT u.id, u.name, u.photo_url, u.provider_kind, u.provider_id, \
             u.authorization_token, u.authorization_token_expiration \
             FROM users u \
             JOIN invitations i ON i.user_id = u.id \
             WHERE i.lunch_id IN ( \
                 SELECT lunch_id FROM invitations WHERE user_id = ?1 \
                 UNION \
                 SELECT id FROM lunches WHERE host_id = ?1 \
             ) \
             AND u.id <> ?1 \
             AND u.id NOT IN (SELECT friend_id FROM friendships WHERE user_id = ?1) \
             ORDER BY u.name",
        )
        .bind(user_id)
        .fetch_all(&self.connection_pool)
        .await
    }
}

impl Create<Friendship, CreateFriendshipDTO> for FriendshipRepository {
    async fn create(&self, data: &CreateFriendshipDTO) -> Result<Friendship, Error> {
        sqlx::query("INSERT INTO friendships (id, user_id, friend_id) VALUES (?1, ?2, ?3)")
            .bind(data.id)
            .bind(data.user_id)
            .bind(data.friend_id)
            .execute(&self.connection_pool)
            .await?;

        Ok(Friendship {
            id: data.id,
            user_id: data.user_id,
            friend_id: data.friend_id,
        })
    }
}

impl Read<Friendship, Uuid> for FriendshipRepository {
    async fn read(&self, id: &Uuid) -> Result<Option<Friendship>, Error> {
        sqlx::query_as::<_, Friendship>(
            "SELECT id, user_id, friend_id FROM friendships WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}

impl Delete<Uuid> for FriendshipRepository {
    async fn delete(&self, id: &Uuid) -> Result<(), Error> {
        sqlx::query("DELETE FROM friendships WHERE id = ?1")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
