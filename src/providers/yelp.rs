//! Yelp business search
//!
//! Mirrors the upstream flow: obtain a bearer token once via client
//! credentials, cache it for the life of the process, then hit the
//! business search endpoint per request. Demo mode serves a fixed
//! synthetic result set instead.

use crate::core::AppError;
use crate::dtos::RestaurantDTO;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

const YELP_TOKEN_URL: &str = "https://api.yelp.com/oauth2/token";
const YELP_SEARCH_URL: &str = "https://api.yelp.com/v3/businesses/search";

/// Yelp reports distances in meters; the API exposes miles.
const MILES_PER_METER: f64 = 0.00062137;

/// Neighborhood the synthetic demo results are anchored to.
const DEMO_LATITUDE: f64 = 47.640068;
const DEMO_LONGITUDE: f64 = -122.129858;

pub struct YelpClient {
    http: reqwest::Client,
    client_id: Option<String>,
    client_secret: Option<String>,
    demo_mode: bool,
    /// Cached bearer token, fetched lazily on the first search.
    token: Mutex<Option<String>>,
}

impl YelpClient {
    pub fn new(client_id: Option<String>, client_secret: Option<String>, demo_mode: bool) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id,
            client_secret,
            demo_mode,
            token: Mutex::new(None),
        }
    }

    /// All restaurants Yelp knows near the given free-form location.
    #[instrument(skip(self))]
    pub async fn search(&self, location: &str) -> Result<Vec<RestaurantDTO>, AppError> {
        if self.demo_mode {
            debug!("Serving demo restaurants");
            return Ok(demo_restaurants());
        }

        let token = self.get_or_fetch_token().await?;

        let response = self
            .http
            .get(YELP_SEARCH_URL)
            .bearer_auth(&token)
            .query(&[("location", location)])
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("Yelp search failed: {}", response.status());
            return Err(AppError::bad_gateway("Yelp search failed"));
        }

        let body: Value = response.json().await?;
        Ok(map_businesses(&body))
    }

    async fn get_or_fetch_token(&self) -> Result<String, AppError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            return Ok(token.clone());
        }

        let (client_id, client_secret) = match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => (id, secret),
            _ => {
                return Err(AppError::service_unavailable(
                    "Yelp credentials not configured",
                ));
            }
        };

        debug!("Fetching Yelp access token");
        let response = self
            .http
            .post(YELP_TOKEN_URL)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", client_id),
                ("client_secret", client_secret),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("Yelp token request failed: {}", response.status());
            return Err(AppError::bad_gateway("Yelp authorization failed"));
        }

        let body: Value = response.json().await?;
        let token = body["access_token"]
            .as_str()
            .ok_or_else(|| AppError::bad_gateway("Yelp authorization failed"))?
            .to_string();

        *cached = Some(token.clone());
        Ok(token)
    }
}

/// Converts the `businesses` array of a Yelp search response into
/// restaurant DTOs, skipping entries missing the fields we require.
fn map_businesses(body: &Value) -> Vec<RestaurantDTO> {
    let businesses = match body["businesses"].as_array() {
        Some(list) => list,
        None => return Vec::new(),
    };

    businesses
        .iter()
        .filter_map(|business| {
            let address = [
                business["location"]["address1"].as_str().unwrap_or(""),
                business["location"]["address2"].as_str().unwrap_or(""),
            ]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

            let category = business["categories"]
                .as_array()
                .map(|list| {
                    list.iter()
                        .filter_map(|c| c["title"].as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();

            Some(RestaurantDTO {
                id: Uuid::new_v4(),
                yelp_id: business["id"].as_str()?.to_string(),
                name: business["name"].as_str()?.to_string(),
                rating: business["rating"].as_f64().unwrap_or(0.0),
                photo_url: business["image_url"].as_str().map(str::to_string),
                address,
                latitude: business["coordinates"]["latitude"].as_f64()?,
                longitude: business["coordinates"]["longitude"].as_f64()?,
                price: business["price"].as_str().map(str::to_string),
                category,
                distance: business["distance"].as_f64().unwrap_or(0.0) * MILES_PER_METER,
            })
        })
        .collect()
}

/// The canned search results demo mode serves instead of calling Yelp.
fn demo_restaurants() -> Vec<RestaurantDTO> {
    let entries: [(&str, f64, Option<&str>, &str); 4] = [
        ("Blue Duck Cafe", 4.5, Some("$$"), "Cafes"),
        ("Taqueria Paloma", 4.0, Some("$"), "Mexican"),
        ("Saffron Garden", 3.5, Some("$$$"), "Indian"),
        ("Pike Noodle House", 4.0, None, "Noodles"),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, (name, rating, price, category))| RestaurantDTO {
            id: Uuid::new_v4(),
            yelp_id: format!("demo-{}", i),
            name: (*name).to_string(),
            rating: *rating,
            photo_url: None,
            address: format!("{} Demo Street", 100 + i),
            latitude: DEMO_LATITUDE + i as f64 * 0.001,
            longitude: DEMO_LONGITUDE - i as f64 * 0.001,
            price: price.map(str::to_string),
            category: (*category).to_string(),
            distance: 0.2 * (i + 1) as f64,
        })
        .collect()
}
