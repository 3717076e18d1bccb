//! Integration tests for lunches and invitations

mod common;

#[cfg(test)]
mod lunch_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use sqlx::SqlitePool;
    use uuid::Uuid;

    #[sqlx::test]
    async fn create_lunch_returns_the_full_payload(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (alice, token) = login_demo_user(&server, "alice-identity", "Alice").await;
        let (bob, _) = login_demo_user(&server, "bob-identity", "Bob").await;

        let response = server
            .post("/api/lunch")
            .authorization_bearer(&token)
            .json(&json!({
                "id": Uuid::new_v4(),
                "host_id": alice,
                "date": "2026-09-01T12:00:00Z",
                "notes": "pizza?",
                "location": restaurant_json(),
                "invitations": [{ "id": Uuid::new_v4(), "user_id": bob }],
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["state"], "Open");
        assert_eq!(body["notes"], "pizza?");
        assert_eq!(body["host"]["id"], alice.to_string());
        assert_eq!(body["location"]["name"], "Blue Duck Cafe");
        assert_eq!(body["invitations"].as_array().expect("array").len(), 1);
        assert_eq!(body["invitations"][0]["user"]["id"], bob.to_string());

        Ok(())
    }

    #[sqlx::test]
    async fn invitation_responses_start_unanswered(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (alice, token) = login_demo_user(&server, "alice-identity", "Alice").await;
        let (bob, _) = login_demo_user(&server, "bob-identity", "Bob").await;

        // A client-sent response must be ignored.
        let response = server
            .post("/api/lunch")
            .authorization_bearer(&token)
            .json(&json!({
                "id": Uuid::new_v4(),
                "host_id": alice,
                "date": "2026-09-01T12:00:00Z",
                "location": restaurant_json(),
                "invitations": [{
                    "id": Uuid::new_v4(),
                    "user_id": bob,
                    "response": "Accepted",
                }],
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["invitations"][0]["response"], "None");

        Ok(())
    }

    #[sqlx::test]
    async fn resubmitting_a_lunch_id_is_rejected(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (alice, token) = login_demo_user(&server, "alice-identity", "Alice").await;

        let lunch_id = Uuid::new_v4();
        for expected in [StatusCode::CREATED, StatusCode::BAD_REQUEST] {
            let response = server
                .post("/api/lunch")
                .authorization_bearer(&token)
                .json(&json!({
                    "id": lunch_id,
                    "host_id": alice,
                    "date": "2026-09-01T12:00:00Z",
                    "location": restaurant_json(),
                }))
                .await;
            response.assert_status(expected);
        }

        Ok(())
    }

    #[sqlx::test]
    async fn hosting_for_someone_else_is_forbidden(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (_, token) = login_demo_user(&server, "alice-identity", "Alice").await;
        let (bob, _) = login_demo_user(&server, "bob-identity", "Bob").await;

        let response = server
            .post("/api/lunch")
            .authorization_bearer(&token)
            .json(&json!({
                "id": Uuid::new_v4(),
                "host_id": bob,
                "date": "2026-09-01T12:00:00Z",
                "location": restaurant_json(),
            }))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);

        Ok(())
    }

    #[sqlx::test]
    async fn only_the_host_can_cancel(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (alice, alice_token) = login_demo_user(&server, "alice-identity", "Alice").await;
        let (bob, bob_token) = login_demo_user(&server, "bob-identity", "Bob").await;

        let (lunch_id, _) =
            create_lunch_with_invitees(&server, &alice_token, alice, &[bob]).await;

        let denied = server
            .delete(&format!("/api/lunch/{}", lunch_id))
            .authorization_bearer(&bob_token)
            .await;
        denied.assert_status(StatusCode::FORBIDDEN);

        let canceled = server
            .delete(&format!("/api/lunch/{}", lunch_id))
            .authorization_bearer(&alice_token)
            .await;
        canceled.assert_status_ok();

        // The invitation went with the lunch.
        let pending: Value = server
            .get("/api/me/invitations")
            .authorization_bearer(&bob_token)
            .await
            .json();
        assert!(pending.as_array().expect("array").is_empty());

        Ok(())
    }

    #[sqlx::test]
    async fn canceling_a_missing_lunch_is_not_found(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (_, token) = login_demo_user(&server, "alice-identity", "Alice").await;

        let response = server
            .delete(&format!("/api/lunch/{}", Uuid::new_v4()))
            .authorization_bearer(&token)
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        Ok(())
    }

    #[sqlx::test]
    async fn my_lunches_unions_hosted_and_accepted(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (alice, alice_token) = login_demo_user(&server, "alice-identity", "Alice").await;
        let (bob, bob_token) = login_demo_user(&server, "bob-identity", "Bob").await;

        // Bob hosts one lunch and accepts an invitation to Alice's.
        let (hosted_id, _) = create_lunch_with_invitees(&server, &bob_token, bob, &[]).await;
        let (invited_id, invitations) =
            create_lunch_with_invitees(&server, &alice_token, alice, &[bob]).await;

        server
            .post("/api/invitation")
            .authorization_bearer(&bob_token)
            .json(&json!({
                "id": invitation_id_for(&invitations, bob),
                "response": "Accepted",
            }))
            .await
            .assert_status_ok();

        let lunches: Value = server
            .get("/api/me/lunches")
            .authorization_bearer(&bob_token)
            .await
            .json();
        let ids: Vec<&str> = lunches
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|l| l["id"].as_str())
            .collect();

        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&hosted_id.to_string().as_str()));
        assert!(ids.contains(&invited_id.to_string().as_str()));

        Ok(())
    }

    #[sqlx::test]
    async fn my_lunches_never_duplicates_a_lunch(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (alice, token) = login_demo_user(&server, "alice-identity", "Alice").await;

        // Alice hosts a lunch she is also invited to, and accepts.
        let (lunch_id, invitations) =
            create_lunch_with_invitees(&server, &token, alice, &[alice]).await;
        server
            .post("/api/invitation")
            .authorization_bearer(&token)
            .json(&json!({
                "id": invitation_id_for(&invitations, alice),
                "response": "Accepted",
            }))
            .await
            .assert_status_ok();

        let lunches: Value = server
            .get("/api/me/lunches")
            .authorization_bearer(&token)
            .await
            .json();
        let lunches = lunches.as_array().expect("array").clone();
        assert_eq!(lunches.len(), 1);
        assert_eq!(lunches[0]["id"], lunch_id.to_string());

        Ok(())
    }

    #[sqlx::test]
    async fn declined_lunches_stay_out_of_my_lunches(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (alice, alice_token) = login_demo_user(&server, "alice-identity", "Alice").await;
        let (bob, bob_token) = login_demo_user(&server, "bob-identity", "Bob").await;

        let (_, invitations) =
            create_lunch_with_invitees(&server, &alice_token, alice, &[bob]).await;
        server
            .post("/api/invitation")
            .authorization_bearer(&bob_token)
            .json(&json!({
                "id": invitation_id_for(&invitations, bob),
                "response": "Declined",
            }))
            .await
            .assert_status_ok();

        let lunches: Value = server
            .get("/api/me/lunches")
            .authorization_bearer(&bob_token)
            .await
            .json();
        assert!(lunches.as_array().expect("array").is_empty());

        Ok(())
    }

    #[sqlx::test]
    async fn pending_invitations_carry_the_lunch(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (alice, alice_token) = login_demo_user(&server, "alice-identity", "Alice").await;
        let (bob, bob_token) = login_demo_user(&server, "bob-identity", "Bob").await;

        let (lunch_id, _) =
            create_lunch_with_invitees(&server, &alice_token, alice, &[bob]).await;

        let pending: Value = server
            .get("/api/me/invitations")
            .authorization_bearer(&bob_token)
            .await
            .json();
        let pending = pending.as_array().expect("array").clone();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0]["response"], "None");
        assert_eq!(pending[0]["lunch"]["id"], lunch_id.to_string());
        assert_eq!(pending[0]["lunch"]["host"]["id"], alice.to_string());

        Ok(())
    }

    #[sqlx::test]
    async fn answered_invitations_leave_the_pending_list(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (alice, alice_token) = login_demo_user(&server, "alice-identity", "Alice").await;
        let (bob, bob_token) = login_demo_user(&server, "bob-identity", "Bob").await;

        let (_, invitations) =
            create_lunch_with_invitees(&server, &alice_token, alice, &[bob]).await;
        server
            .post("/api/invitation")
            .authorization_bearer(&bob_token)
            .json(&json!({
                "id": invitation_id_for(&invitations, bob),
                "response": "Accepted",
            }))
            .await
            .assert_status_ok();

        let pending: Value = server
            .get("/api/me/invitations")
            .authorization_bearer(&bob_token)
            .await
            .json();
        assert!(pending.as_array().expect("array").is_empty());

        Ok(())
    }

    #[sqlx::test]
    async fn only_the_invitee_can_answer(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (alice, alice_token) = login_demo_user(&server, "alice-identity", "Alice").await;
        let (bob, _) = login_demo_user(&server, "bob-identity", "Bob").await;

        let (_, invitations) =
            create_lunch_with_invitees(&server, &alice_token, alice, &[bob]).await;

        // The host answering for Bob is rejected.
        let response = server
            .post("/api/invitation")
            .authorization_bearer(&alice_token)
            .json(&json!({
                "id": invitation_id_for(&invitations, bob),
                "response": "Accepted",
            }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[sqlx::test]
    async fn resetting_an_answer_to_none_is_rejected(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (alice, alice_token) = login_demo_user(&server, "alice-identity", "Alice").await;
        let (bob, bob_token) = login_demo_user(&server, "bob-identity", "Bob").await;

        let (_, invitations) =
            create_lunch_with_invitees(&server, &alice_token, alice, &[bob]).await;

        let response = server
            .post("/api/invitation")
            .authorization_bearer(&bob_token)
            .json(&json!({
                "id": invitation_id_for(&invitations, bob),
                "response": "None",
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[sqlx::test]
    async fn answering_a_missing_invitation_is_not_found(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (_, token) = login_demo_user(&server, "alice-identity", "Alice").await;

        let response = server
            .post("/api/invitation")
            .authorization_bearer(&token)
            .json(&json!({
                "id": Uuid::new_v4(),
                "response": "Accepted",
            }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        Ok(())
    }
}
