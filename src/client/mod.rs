//! Swift Transit API clients
//!
//! [`AuthClient`] performs the login round trip. [`TransitClient`] performs
//! every protected request, reading its credential from the
//! [`SessionStore`](crate::session::SessionStore).

pub mod api;
pub mod login;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod transit;

pub use api::{AdminApi, AuthApi, OwnerApi};
pub use login::AuthClient;
#[cfg(test)]
pub use mock::MockAuthClient;
pub use pagination::{DEFAULT_PAGE_SIZE, Page, PaginationParams};
pub use transit::{DEFAULT_API_HOST, TransitClient};
