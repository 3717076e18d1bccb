//! Auth services - login against an identity provider and logout

use crate::core::{AppError, AppState, decode_jwt, encode_jwt};
use crate::dtos::{AuthenticatedUserDTO, LoginRequestDTO};
use crate::entities::User;
use crate::repositories::Read;
use axum::{
    Extension,
    extract::{Json, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

/// POST /api/login. The body carries a provider-issued access token; the
/// provider verifies it and reports the profile, which is upserted on
/// `(provider_kind, provider_id)`. A fresh 30-day app token is issued and
/// stored on the row.
///
/// A request that already carries a valid app bearer token short-circuits:
/// the caller is returned as-is without another provider round trip.
#[instrument(skip(state, headers, body), fields(provider = ?body.provider))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<LoginRequestDTO>,
) -> Result<Json<AuthenticatedUserDTO>, AppError> {
    debug!("Login requested");
    if let Some(user) = caller_with_valid_token(&state, &headers).await? {
        info!("Login short-circuited by a still-valid app token");
        return Ok(Json(AuthenticatedUserDTO::from(user)));
    }

    body.validate()?;

    let profile = state
        .identity
        .verify(body.provider, &body.token, body.name.as_deref())
        .await?;

    let user = match state
        .user
        .find_by_provider(profile.provider_kind, &profile.provider_id)
        .await?
    {
        Some(existing) => {
            debug!("Returning user {}", existing.id);
            state
                .user
                .update_profile(&existing.id, &profile.name, &profile.photo_url)
                .await?;
            User {
                name: profile.name,
                photo_url: profile.photo_url,
                ..existing
            }
        }
        None => {
            let user = User {
                id: Uuid::new_v4(),
                name: profile.name,
                photo_url: profile.photo_url,
                provider_kind: profile.provider_kind,
                provider_id: profile.provider_id,
                authorization_token: None,
                authorization_token_expiration: None,
            };
            state.user.insert(&user).await?;
            info!("Registered new user {}", user.id);
            user
        }
    };

    let (token, expiration) = encode_jwt(user.id, &state.jwt_secret)?;
    state.user.store_token(&user.id, &token, expiration).await?;

    info!("User {} logged in", user.id);
    Ok(Json(AuthenticatedUserDTO {
        authorization_token: Some(token),
        authorization_token_expiration: Some(expiration),
        ..AuthenticatedUserDTO::from(user)
    }))
}

/// POST /api/logout. Drops the stored app token, which revokes every copy
/// of the JWT even before its expiry.
#[instrument(skip(state, current_user), fields(user_id = %current_user.id))]
pub async fn logout_user(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    state.user.clear_token(&current_user.id).await?;
    info!("User {} logged out", current_user.id);
    Ok(StatusCode::OK)
}

/// Resolves the bearer token of a login request, if one was sent and still
/// maps to a logged-in user. Any failure along the way just means the full
/// provider login runs instead.
async fn caller_with_valid_token(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Option<User>, AppError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let token = match token {
        Some(token) => token,
        None => return Ok(None),
    };

    let claims = match decode_jwt(token, &state.jwt_secret) {
        Ok(data) => data.claims,
        Err(_) => {
            warn!("Login carried an invalid bearer token, re-authenticating");
            return Ok(None);
        }
    };

    let user = state.user.read(&claims.sub).await?;
    Ok(user.filter(|u| u.has_valid_token(Utc::now())))
}
