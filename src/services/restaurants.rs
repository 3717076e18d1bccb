//! Restaurants services - Yelp-backed location search

use crate::core::{AppError, AppState};
use crate::dtos::{RestaurantDTO, RestaurantSearchQuery};
use crate::entities::User;
use axum::{
    Extension,
    extract::{Json, Query, State},
};
use std::sync::Arc;
use tracing::{info, instrument};

/// GET /api/restaurants?location=... Results come from Yelp (or the demo
/// set) and are not persisted until one is picked as a lunch location.
#[instrument(skip(state, current_user), fields(user_id = %current_user.id, location = %params.location))]
pub async fn search_restaurants(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Query(params): Query<RestaurantSearchQuery>,
) -> Result<Json<Vec<RestaurantDTO>>, AppError> {
    if params.location.trim().is_empty() {
        return Err(AppError::bad_request("A search location is required"));
    }

    let restaurants = state.yelp.search(&params.location).await?;
    info!("Returning {} restaurants", restaurants.len());
    Ok(Json(restaurants))
}
