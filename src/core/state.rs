//! Application state shared by all routes and middleware.

use crate::core::Config;
use crate::providers::{IdentityClient, YelpClient};
use crate::repositories::{
    FriendshipRepository, GroupMembershipRepository, GroupRepository, InvitationRepository,
    LunchRepository, RestaurantRepository, UserRepository,
};
use sqlx::SqlitePool;

pub struct AppState {
    pub user: UserRepository,
    pub friendship: FriendshipRepository,
    pub group: GroupRepository,
    pub membership: GroupMembershipRepository,
    pub lunch: LunchRepository,
    pub invitation: InvitationRepository,
    pub restaurant: RestaurantRepository,

    /// Secret key for the app-local JWTs.
    pub jwt_secret: String,

    /// Verifies provider access tokens at login.
    pub identity: IdentityClient,

    /// Yelp business search, or synthetic results in demo mode.
    pub yelp: YelpClient,
}

impl AppState {
    /// Builds the state from a connected pool and the loaded configuration,
    /// initializing every repository with its own pool handle.
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            friendship: FriendshipRepository::new(pool.clone()),
            group: GroupRepository::new(pool.clone()),
            membership: GroupMembershipRepository::new(pool.clone()),
            lunch: LunchRepository::new(pool.clone()),
            invitation: InvitationRepository::new(pool.clone()),
            restaurant: RestaurantRepository::new(pool),
            jwt_secret: config.jwt_secret.clone(),
            identity: IdentityClient::new(config.demo_mode),
            yelp: YelpClient::new(
                config.yelp_client_id.clone(),
                config.yelp_client_secret.clone(),
                config.demo_mode,
            ),
        }
    }
}
