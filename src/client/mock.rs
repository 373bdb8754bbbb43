//! Mock authentication client for testing
//!
//! Provides a scripted [`AuthApi`] so session tests run without HTTP.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::AuthApi;
use super::models::{LoginResponse, Principal};
use crate::error::{AuthError, LOGIN_FAILED};
use crate::session::Portal;

/// Mock auth client.
///
/// Configure the response via builder methods, then hand it to a
/// [`SessionStore`](crate::session::SessionStore).
///
/// # Example
/// ```ignore
/// let auth = MockAuthClient::new().with_success("xyz", None);
/// let store = SessionStore::new(Portal::Admin, storage, Arc::new(auth));
/// ```
#[derive(Default)]
pub struct MockAuthClient {
    /// Response returned when no error is pending
    success: Mutex<Option<LoginResponse>>,
    /// Error to return - consumed on first use
    error: Mutex<Option<AuthError>>,
    /// Artificial latency, read when the call starts
    delay: Mutex<Duration>,
    /// Captured (identifier, secret) pairs
    calls: Mutex<Vec<(String, String)>>,
}

impl MockAuthClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Succeed with `token` and an optional principal.
    pub fn with_success(mut self, token: &str, principal: Option<Principal>) -> Self {
        *self.success.get_mut() = Some(LoginResponse {
            principal,
            token: token.to_string(),
        });
        self
    }

    /// Fail the next login with `error`.
    pub fn with_error(mut self, error: AuthError) -> Self {
        *self.error.get_mut() = Some(error);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        *self.delay.get_mut() = delay;
        self
    }

    /// Replace the success response for later calls.
    pub async fn set_success(&self, token: &str, principal: Option<Principal>) {
        *self.success.lock().await = Some(LoginResponse {
            principal,
            token: token.to_string(),
        });
    }

    /// Fail the next call with `error`.
    pub async fn set_error(&self, error: AuthError) {
        *self.error.lock().await = Some(error);
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.lock().await = delay;
    }

    /// Captured login calls, oldest first.
    pub async fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl AuthApi for MockAuthClient {
    async fn login(
        &self,
        _portal: Portal,
        identifier: &str,
        secret: &str,
    ) -> Result<LoginResponse, AuthError> {
        self.calls
            .lock()
            .await
            .push((identifier.to_string(), secret.to_string()));

        // Resolve the outcome up front so later reconfiguration only affects
        // later calls.
        let outcome = match self.error.lock().await.take() {
            Some(error) => Err(error),
            None => self
                .success
                .lock()
                .await
                .clone()
                .ok_or_else(|| AuthError::Rejected(LOGIN_FAILED.to_string())),
        };
        let delay = *self.delay.lock().await;

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_error_is_consumed() {
        let mock = MockAuthClient::new()
            .with_success("xyz", None)
            .with_error(AuthError::Rejected("nope".to_string()));

        assert!(mock.login(Portal::Admin, "a", "p").await.is_err());
        let response = mock.login(Portal::Admin, "a", "p").await.unwrap();
        assert_eq!(response.token, "xyz");
        assert_eq!(mock.calls().await.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_without_script_rejects() {
        let mock = MockAuthClient::new();
        let err = mock.login(Portal::Owner, "a", "p").await.unwrap_err();
        assert_eq!(err.to_string(), LOGIN_FAILED);
    }
}
