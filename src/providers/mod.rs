//! Providers module - thin clients for the external services the app
//! leans on: identity providers at login and Yelp for restaurant search.
//! In demo mode both are answered locally with synthetic data.

pub mod identity;
pub mod yelp;

pub use identity::{IdentityClient, ProviderProfile};
pub use yelp::YelpClient;
