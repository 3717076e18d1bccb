//! Query DTOs for search endpoints

use serde::{Deserialize, Serialize};

/// Query parameters of GET /api/restaurants.
#[derive(Serialize, Deserialize, Debug)]
pub struct RestaurantSearchQuery {
    /// Free-form location string forwarded to Yelp, e.g. a street address.
    pub location: String,
}

/// Query parameters of GET /api/users.
#[derive(Serialize, Deserialize, Debug)]
pub struct UserSearchQuery {
    pub name: String,
}
