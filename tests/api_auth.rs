//! Integration tests for login and logout
//!
//! These tests use `#[sqlx::test]`, which provisions an isolated SQLite
//! database per test and applies the migrations from `migrations/`.

mod common;

#[cfg(test)]
mod auth_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use sqlx::SqlitePool;

    #[sqlx::test]
    async fn login_registers_a_new_user(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/api/login")
            .json(&json!({
                "provider": "Demo",
                "token": "alice-identity",
                "name": "Alice",
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["name"], "Alice");
        assert_eq!(body["provider_kind"], "Demo");
        assert!(body["authorization_token"].is_string());
        assert!(body["authorization_token_expiration"].is_string());

        Ok(())
    }

    #[sqlx::test]
    async fn login_twice_returns_the_same_user(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let (first_id, _) = login_demo_user(&server, "alice-identity", "Alice").await;
        let (second_id, _) = login_demo_user(&server, "alice-identity", "Alice").await;

        assert_eq!(first_id, second_id);
        Ok(())
    }

    #[sqlx::test]
    async fn distinct_identities_get_distinct_users(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let (alice, _) = login_demo_user(&server, "alice-identity", "Alice").await;
        let (bob, _) = login_demo_user(&server, "bob-identity", "Bob").await;

        assert_ne!(alice, bob);
        Ok(())
    }

    #[sqlx::test]
    async fn login_with_empty_token_is_rejected(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/api/login")
            .json(&json!({
                "provider": "Demo",
                "token": "",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[sqlx::test]
    async fn login_with_valid_bearer_short_circuits(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (user_id, token) = login_demo_user(&server, "alice-identity", "Alice").await;

        // Re-login with the app token attached keeps the same session.
        let response = server
            .post("/api/login")
            .authorization_bearer(&token)
            .json(&json!({
                "provider": "Demo",
                "token": "alice-identity",
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["id"], user_id.to_string());
        assert_eq!(body["authorization_token"], token);

        Ok(())
    }

    #[sqlx::test]
    async fn protected_route_without_token_is_unauthorized(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.get("/api/me/friends").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[sqlx::test]
    async fn protected_route_with_garbage_token_is_unauthorized(
        pool: SqlitePool,
    ) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .get("/api/me/friends")
            .authorization_bearer("not.a.jwt")
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[sqlx::test]
    async fn logout_revokes_the_token(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (_, token) = login_demo_user(&server, "alice-identity", "Alice").await;

        let before = server
            .get("/api/me/friends")
            .authorization_bearer(&token)
            .await;
        before.assert_status_ok();

        let logout = server
            .post("/api/logout")
            .authorization_bearer(&token)
            .await;
        logout.assert_status_ok();

        // The JWT has not expired, but the stored token is gone.
        let after = server
            .get("/api/me/friends")
            .authorization_bearer(&token)
            .await;
        after.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[sqlx::test]
    async fn login_response_never_leaks_other_users(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (_, token) = login_demo_user(&server, "alice-identity", "Alice").await;
        login_demo_user(&server, "bob-identity", "Bob").await;

        // User search exposes the public projection only.
        let response = server
            .get("/api/users")
            .authorization_bearer(&token)
            .add_query_param("name", "Bob")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        let users = body.as_array().expect("array of users");
        assert_eq!(users.len(), 1);
        assert!(users[0].get("authorization_token").is_none());

        Ok(())
    }
}
