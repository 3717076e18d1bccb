//! Services module - the HTTP handlers, one sub-module per resource.

pub mod auth;
pub mod friends;
pub mod groups;
pub mod invitations;
pub mod lunch;
pub mod me;
pub mod restaurants;
pub mod users;

pub use auth::{login_user, logout_user};
pub use friends::{add_friend, remove_friend, suggest_friends};
pub use groups::{create_group, delete_group, join_group, leave_group};
pub use invitations::respond_to_invitation;
pub use lunch::{cancel_lunch, create_lunch};
pub use me::{my_friends, my_invitations, my_lunches};
pub use restaurants::search_restaurants;
pub use users::search_users;

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
