//! Shared helpers for the integration tests
//!
//! Every test runs against an isolated SQLite database provisioned by
//! `#[sqlx::test]` with the migrations applied, and talks to the real
//! router through an `axum_test::TestServer`. The state is built in demo
//! mode so login and restaurant search never leave the process.

#![allow(dead_code)]

use axum_test::TestServer;
use lunch_scheduler::core::{AppState, Config};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::sync::Arc;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-do-not-reuse";

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        max_connections: 4,
        demo_mode: true,
        yelp_client_id: None,
        yelp_client_secret: None,
        app_env: "test".to_string(),
    }
}

pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool, &test_config()))
}

pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = lunch_scheduler::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Logs in through the demo provider and returns the new user's id and
/// app bearer token. The provider token doubles as the demo identity, so
/// distinct `provider_id`s give distinct users.
pub async fn login_demo_user(server: &TestServer, provider_id: &str, name: &str) -> (Uuid, String) {
    let response = server
        .post("/api/login")
        .json(&json!({
            "provider": "Demo",
            "token": provider_id,
            "name": name,
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();

    let id = body["id"]
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .expect("login response carries the user id");
    let token = body["authorization_token"]
        .as_str()
        .expect("login response carries the app token")
        .to_string();

    (id, token)
}

/// A restaurant payload shaped like a prior search result, ready to be
/// embedded as a lunch location.
pub fn restaurant_json() -> Value {
    json!({
        "id": Uuid::new_v4(),
        "yelp_id": "test-blue-duck",
        "name": "Blue Duck Cafe",
        "rating": 4.5,
        "photo_url": null,
        "address": "100 Test Street",
        "latitude": 47.640068,
        "longitude": -122.129858,
        "price": "$$",
        "category": "Cafes",
        "distance": 0.3
    })
}

/// Creates a lunch hosted by `host_id` with one invitation per invitee,
/// returning the lunch id and the invitation payloads from the response.
pub async fn create_lunch_with_invitees(
    server: &TestServer,
    host_token: &str,
    host_id: Uuid,
    invitees: &[Uuid],
) -> (Uuid, Vec<Value>) {
    let lunch_id = Uuid::new_v4();
    let invitations: Vec<Value> = invitees
        .iter()
        .map(|user_id| json!({ "id": Uuid::new_v4(), "user_id": user_id }))
        .collect();

    let response = server
        .post("/api/lunch")
        .authorization_bearer(host_token)
        .json(&json!({
            "id": lunch_id,
            "host_id": host_id,
            "date": "2026-09-01T12:00:00Z",
            "notes": "team lunch",
            "location": restaurant_json(),
            "invitations": invitations,
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    let created_invitations = body["invitations"]
        .as_array()
        .cloned()
        .unwrap_or_default();

    (lunch_id, created_invitations)
}

/// Finds the invitation id addressed to `user_id` in a lunch payload.
pub fn invitation_id_for(invitations: &[Value], user_id: Uuid) -> Uuid {
    invitations
        .iter()
        .find(|inv| inv["user"]["id"].as_str() == Some(user_id.to_string().as_str()))
        .and_then(|inv| inv["id"].as_str())
        .and_then(|s| Uuid::parse_str(s).ok())
        .expect("an invitation for the user exists")
}
