//! Server library - exposes the main modules for the tests

pub mod core;
pub mod dtos;
pub mod entities;
pub mod providers;
pub mod repositories;
pub mod services;

pub use crate::core::{AppError, AppState, Config, auth};
pub use crate::services::root;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use std::sync::Arc;

/// Builds the application router. Everything under /api except login
/// sits behind the bearer-token middleware.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api", configure_api_routes(state.clone()))
        .with_state(state)
}

fn configure_api_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use crate::services::*;

    let public_routes = Router::new().route("/login", post(login_user));

    let protected_routes = Router::new()
        .route("/logout", post(logout_user))
        .route("/me/lunches", get(my_lunches))
        .route("/me/friends", get(my_friends))
        .route("/me/invitations", get(my_invitations))
        .route("/friends/suggest", get(suggest_friends))
        .route("/friends", post(add_friend))
        .route("/friends/{friendship_id}", delete(remove_friend))
        .route("/groups", post(create_group))
        .route("/groups/{group_id}", delete(delete_group))
        .route("/groups/membership", post(join_group))
        .route("/groups/membership/{membership_id}", delete(leave_group))
        .route("/lunch", post(create_lunch))
        .route("/lunch/{lunch_id}", delete(cancel_lunch))
        .route("/invitation", post(respond_to_invitation))
        .route("/restaurants", get(search_restaurants))
        .route("/users", get(search_users))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ));

    public_routes.merge(protected_routes)
}
