//! Restaurant DTOs

use crate::entities::Restaurant;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One Yelp business as the API exposes it. The same shape is accepted
/// back as a lunch location, at which point it gets persisted.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RestaurantDTO {
    pub id: Uuid,
    pub yelp_id: String,
    pub name: String,
    pub rating: f64,
    pub photo_url: Option<String>,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price: Option<String>,
    pub category: String,
    /// Miles from the searched location.
    pub distance: f64,
}

impl From<Restaurant> for RestaurantDTO {
    fn from(value: Restaurant) -> Self {
        Self {
            id: value.id,
            yelp_id: value.yelp_id,
            name: value.name,
            rating: value.rating,
            photo_url: value.photo_url,
            address: value.address,
            latitude: value.latitude,
            longitude: value.longitude,
            price: value.price,
            category: value.category,
            distance: value.distance,
        }
    }
}

impl From<RestaurantDTO> for Restaurant {
    fn from(value: RestaurantDTO) -> Self {
        Self {
            id: value.id,
            yelp_id: value.yelp_id,
            name: value.name,
            rating: value.rating,
            photo_url: value.photo_url,
            address: value.address,
            latitude: value.latitude,
            longitude: value.longitude,
            price: value.price,
            category: value.category,
            distance: value.distance,
        }
    }
}
