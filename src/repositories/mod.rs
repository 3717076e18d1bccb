//! Repositories module
//!
//! One repository per entity, each owning a clone of the shared SQLite
//! connection pool. Queries use the runtime `query_as` API: the schema is
//! created by `migrations/` when the pool is opened, so there is no live
//! database to check against at compile time.

pub mod friendship;
pub mod group;
pub mod group_membership;
pub mod invitation;
pub mod lunch;
pub mod restaurant;
pub mod traits;
pub mod user;

pub use traits::{Create, Delete, Read};

pub use friendship::FriendshipRepository;
pub use group::GroupRepository;
pub use group_membership::GroupMembershipRepository;
pub use invitation::InvitationRepository;
pub use lunch::LunchRepository;
pub use restaurant::RestaurantRepository;
pub use user::UserRepository;
