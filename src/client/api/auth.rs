//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::LoginResponse;
use crate::error::AuthError;
use crate::session::Portal;

/// Authentication operations for the Swift Transit API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange an identifier/secret pair for a credential on `portal`
    async fn login(
        &self,
        portal: Portal,
        identifier: &str,
        secret: &str,
    ) -> Result<LoginResponse, AuthError>;
}
