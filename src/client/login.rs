//! Login client for both portals

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;

use super::api::AuthApi;
use super::models::{ErrorBody, LoginRequest, LoginResponse};
use crate::error::{ApiError, AuthError, LOGIN_FAILED, Result};
use crate::session::Portal;

/// Performs the unauthenticated login round trip
pub struct AuthClient {
    http: HttpClient,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(
        &self,
        portal: Portal,
        identifier: &str,
        secret: &str,
    ) -> std::result::Result<LoginResponse, AuthError> {
        let url = format!("{}{}", self.base_url, portal.login_path());
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest {
                username: identifier,
                password: secret,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("Login rejected with status {}", status);
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| LOGIN_FAILED.to_string());
            return Err(AuthError::Rejected(message));
        }

        let login: LoginResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        if login.token.trim().is_empty() {
            return Err(AuthError::InvalidResponse("empty token".to_string()));
        }

        Ok(login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_admin_login_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/admin/auth/login")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "username": "a",
                "password": "p"
            })))
            .with_status(200)
            .with_body(r#"{"admin": {"username": "a"}, "token": "xyz"}"#)
            .create_async()
            .await;

        let client = AuthClient::new(&server.url()).unwrap();
        let response = client.login(Portal::Admin, "a", "p").await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.token, "xyz");
        assert_eq!(response.principal.unwrap().username, "a");
    }

    #[tokio::test]
    async fn test_owner_login_uses_owner_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/bus-owner/auth/login")
            .with_status(200)
            .with_body(r#"{"token": "owner-cred"}"#)
            .create_async()
            .await;

        let client = AuthClient::new(&format!("{}/", server.url())).unwrap();
        let response = client.login(Portal::Owner, "fleet", "pw").await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.token, "owner-cred");
    }

    #[tokio::test]
    async fn test_login_rejected_with_server_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/admin/auth/login")
            .with_status(401)
            .with_body(r#"{"message": "invalid credentials"}"#)
            .create_async()
            .await;

        let client = AuthClient::new(&server.url()).unwrap();
        let err = client.login(Portal::Admin, "a", "wrong").await.unwrap_err();

        assert_eq!(err.to_string(), "invalid credentials");
    }

    #[tokio::test]
    async fn test_login_rejected_without_message_is_generic() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/admin/auth/login")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let client = AuthClient::new(&server.url()).unwrap();
        let err = client.login(Portal::Admin, "a", "p").await.unwrap_err();

        assert!(matches!(err, AuthError::Rejected(_)));
        assert_eq!(err.to_string(), LOGIN_FAILED);
    }

    #[tokio::test]
    async fn test_login_malformed_success_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/admin/auth/login")
            .with_status(200)
            .with_body(r#"{"admin": {"username": "a"}}"#)
            .create_async()
            .await;

        let client = AuthClient::new(&server.url()).unwrap();
        let err = client.login(Portal::Admin, "a", "p").await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_login_empty_token_is_invalid() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/admin/auth/login")
            .with_status(200)
            .with_body(r#"{"token": ""}"#)
            .create_async()
            .await;

        let client = AuthClient::new(&server.url()).unwrap();
        let err = client.login(Portal::Admin, "a", "p").await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_login_network_failure_is_generic() {
        // Nothing listens on port 9 of the loopback interface
        let client = AuthClient::new("http://127.0.0.1:9").unwrap();
        let err = client.login(Portal::Admin, "a", "p").await.unwrap_err();

        assert!(matches!(err, AuthError::Network(_)));
        assert_eq!(err.to_string(), LOGIN_FAILED);
    }
}
