//! RestaurantRepository - cached Yelp businesses used as lunch locations

use super::Read;
use crate::entities::Restaurant;
use sqlx::{Error, SqlitePool};
use uuid::Uuid;

pub struct RestaurantRepository {
    connection_pool: SqlitePool,
}

impl RestaurantRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Persist a restaurant referenced as a lunch location. The record is
    /// a cache of a Yelp result: if the id is already stored the existing
    /// row wins and the insert is a no-op.
    pub async fn upsert(&self, restaurant: &Restaurant) -> Result<(), Error> {
        sqlx::query(
            "INSERT INTO restaurants (id, yelp_id, name, rating, photo_url, address, \
             latitude, longitude, price, category, distance) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(restaurant.id)
        .bind(&restaurant.yelp_id)
        .bind(&restaurant.name)
        .bind(restaurant.rating)
        .bind(&restaurant.photo_url)
        .bind(&restaurant.address)
        .bind(restaurant.latitude)
        .bind(restaurant.longitude)
        .bind(&restaurant.price)
        .bind(&restaurant.category)
        .bind(restaurant.distance)
        .execute(&self.connection_pool)
        .await?;

        Ok(())
    }
}

impl Read<Restaurant, Uuid> for RestaurantRepository {
    async fn read(&self, id: &Uuid) -> Result<Option<Restaurant>, Error> {
        sqlx::query_as::<_, Restaurant>(
            "SELECT id, yelp_id, name, rating, photo_url, address, latitude, longitude, \
             price, category, distance \
             FROM restaurants WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}
