//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login round trip (no credential required)
//! - [`AdminApi`] - System-administrator portal operations
//! - [`OwnerApi`] - Bus-owner portal operations

mod admin;
mod auth;
mod owner;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use owner::OwnerApi;
