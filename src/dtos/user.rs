//! User DTOs

use crate::entities::{AuthProviderKind, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Public projection of a user, safe to hand to any caller.
/// Never carries the app authorization token.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserDTO {
    pub id: Uuid,
    pub name: String,
    pub photo_url: Option<String>,
    pub provider_kind: AuthProviderKind,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            photo_url: value.photo_url,
            provider_kind: value.provider_kind,
        }
    }
}

/// Login response: the caller's own record including the freshly issued
/// app token and its expiry.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthenticatedUserDTO {
    pub id: Uuid,
    pub name: String,
    pub photo_url: Option<String>,
    pub provider_kind: AuthProviderKind,
    pub provider_id: String,
    pub authorization_token: Option<String>,
    pub authorization_token_expiration: Option<DateTime<Utc>>,
}

impl From<User> for AuthenticatedUserDTO {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            photo_url: value.photo_url,
            provider_kind: value.provider_kind,
            provider_id: value.provider_id,
            authorization_token: value.authorization_token,
            authorization_token_expiration: value.authorization_token_expiration,
        }
    }
}

/// Body of POST /api/login: a provider-issued access token to verify.
/// `name` is only honored by the demo provider, which has no profile
/// endpoint to fetch it from.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct LoginRequestDTO {
    pub provider: AuthProviderKind,
    #[validate(length(min = 1, message = "provider token must not be empty"))]
    pub token: String,
    pub name: Option<String>,
}
