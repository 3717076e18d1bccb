use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ********************* ENUMS **********************//

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
pub enum AuthProviderKind {
    Microsoft,
    Facebook,
    Demo,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
pub enum LunchState {
    Open,
    Canceled,
}

/// An invitee starts at `None` and moves to `Accepted` or `Declined`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
pub enum InviteResponseKind {
    None,
    Accepted,
    Declined,
}

// ********************* MODELS *******************//

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub photo_url: Option<String>,
    pub provider_kind: AuthProviderKind,
    /// Identity as reported by the provider, unique together with provider_kind.
    pub provider_id: String,
    pub authorization_token: Option<String>,
    pub authorization_token_expiration: Option<DateTime<Utc>>,
}

impl User {
    /// True while a stored app token exists and has not expired.
    pub fn has_valid_token(&self, now: DateTime<Utc>) -> bool {
        self.authorization_token.is_some()
            && matches!(self.authorization_token_expiration, Some(exp) if exp > now)
    }
}

/// Directed friendship row: `user_id` keeps `friend_id` in their friend list.
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Friendship {
    pub id: Uuid,
    pub user_id: Uuid,
    pub friend_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct GroupMembership {
    pub id: Uuid,
    pub group_id: Uuid,
    pub member_id: Uuid,
}

/// Cached Yelp business, persisted once referenced as a lunch location.
/// `distance` is in miles, converted from the meters Yelp reports.
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Restaurant {
    pub id: Uuid,
    pub yelp_id: String,
    pub name: String,
    pub rating: f64,
    pub photo_url: Option<String>,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price: Option<String>,
    pub category: String,
    pub distance: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Lunch {
    pub id: Uuid,
    pub host_id: Uuid,
    pub location_id: Uuid,
    pub date: DateTime<Utc>,
    pub notes: String,
    pub state: LunchState,
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Invitation {
    pub id: Uuid,
    pub lunch_id: Uuid,
    pub user_id: Uuid,
    pub response: InviteResponseKind,
}
