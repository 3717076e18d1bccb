//! DTOs module - Data Transfer Objects
//!
//! Everything crossing the HTTP boundary lives here, keeping the external
//! representation separate from the database entities.

pub mod friendship;
pub mod group;
pub mod invitation;
pub mod lunch;
pub mod query;
pub mod restaurant;
pub mod user;

pub use friendship::{CreateFriendshipDTO, FriendshipDTO};
pub use group::{CreateGroupDTO, CreateGroupMembershipDTO, GroupDTO, GroupMembershipDTO};
pub use invitation::{PendingInvitationDTO, RespondInvitationDTO};
pub use lunch::{CreateLunchDTO, LunchDTO, LunchInvitationDTO, LunchInviteDTO};
pub use query::{RestaurantSearchQuery, UserSearchQuery};
pub use restaurant::RestaurantDTO;
pub use user::{AuthenticatedUserDTO, LoginRequestDTO, UserDTO};
