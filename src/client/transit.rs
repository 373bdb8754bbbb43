//! Swift Transit API client for protected endpoints

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::{AdminApi, OwnerApi};
use super::models::{
    Bus, BusAnalytics, BusOwner, CreateBusOwnerRequest, DashboardStats, ErrorBody,
    OwnerAnalytics, OwnerBus, RegisterBusRequest, Route, Ticket, Transaction,
    UpdateBusOwnerRequest, User,
};
use super::pagination::{Page, PaginationParams, decode_page};
use crate::error::{ApiError, Result};
use crate::session::{RouteGuard, SessionStore};

/// Default API host used by both portals
pub const DEFAULT_API_HOST: &str = "http://localhost:8080";

/// Client for every endpoint that needs `Authorization: Bearer <credential>`.
///
/// The credential is read from the session on each request. A 401 or 403
/// signs the session out so later commands see the change.
pub struct TransitClient {
    http: HttpClient,
    base_url: String,
    session: Arc<SessionStore>,
    guard: RouteGuard,
}

impl TransitClient {
    pub fn new(base_url: &str, session: Arc<SessionStore>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            guard: RouteGuard,
        })
    }

    /// Send an authorized request and map non-success statuses to errors
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<Value>,
    ) -> Result<Response> {
        let credential = self.guard.require(&self.session.snapshot())?;

        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(credential.expose());
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            self.session.confirm(&credential);
            return Ok(response);
        }

        match status {
            StatusCode::UNAUTHORIZED => {
                self.session.invalidate(&credential);
                Err(ApiError::Unauthorized.into())
            }
            StatusCode::FORBIDDEN => {
                self.session.invalidate(&credential);
                Err(ApiError::Forbidden.into())
            }
            StatusCode::NOT_FOUND => {
                let msg = error_message(response, "Resource not found").await;
                Err(ApiError::NotFound(msg).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let msg = error_message(response, "Bad request").await;
                Err(ApiError::BadRequest(msg).into())
            }
            status if status.is_server_error() => {
                let fallback = format!("Server error: {}", status);
                let msg = error_message(response, &fallback).await;
                Err(ApiError::ServerError(msg).into())
            }
            _ => Err(ApiError::InvalidResponse(format!("Unexpected status code: {}", status)).into()),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        let response = self.send(Method::GET, path, query, None).await?;
        let text = response.text().await.map_err(ApiError::from)?;
        let data = serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;
        Ok(data)
    }

    /// GET a list endpoint whose body may be `null` when empty
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let items: Option<Vec<T>> = self.get_json(path, &[]).await?;
        Ok(items.unwrap_or_default())
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        pagination: &PaginationParams,
    ) -> Result<Page<T>> {
        let body: Value = self.get_json(path, &pagination.to_query_params()).await?;
        Ok(decode_page(body, key)?)
    }

    /// Send a mutation; the response body is not needed
    async fn execute(&self, method: Method, path: &str, body: Option<Value>) -> Result<()> {
        self.send(method, path, &[], body).await?;
        Ok(())
    }
}

/// Pull `message` out of an error body, falling back to raw text
async fn error_message(response: Response, fallback: &str) -> String {
    let text = match response.text().await {
        Ok(text) => text,
        Err(_) => return fallback.to_string(),
    };

    if let Ok(ErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<ErrorBody>(&text)
    {
        return message;
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[async_trait]
impl AdminApi for TransitClient {
    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.get_json("/admin/dashboard/stats", &[]).await
    }

    async fn list_users(&self, pagination: &PaginationParams) -> Result<Page<User>> {
        self.get_page("/admin/users", "users", pagination).await
    }

    async fn delete_user(&self, id: i64) -> Result<()> {
        self.execute(Method::DELETE, &format!("/admin/users/{}", id), None)
            .await
    }

    async fn list_bus_owners(&self, pagination: &PaginationParams) -> Result<Page<BusOwner>> {
        self.get_page("/admin/bus-owners", "bus_owners", pagination)
            .await
    }

    async fn create_bus_owner(&self, request: &CreateBusOwnerRequest) -> Result<()> {
        let body = serde_json::to_value(request)?;
        self.execute(Method::POST, "/admin/bus-owners", Some(body))
            .await
    }

    async fn update_bus_owner(&self, id: i64, request: &UpdateBusOwnerRequest) -> Result<()> {
        let body = serde_json::to_value(request)?;
        self.execute(Method::PUT, &format!("/admin/bus-owners/{}", id), Some(body))
            .await
    }

    async fn delete_bus_owner(&self, id: i64) -> Result<()> {
        self.execute(Method::DELETE, &format!("/admin/bus-owners/{}", id), None)
            .await
    }

    async fn list_buses(&self, pagination: &PaginationParams) -> Result<Page<Bus>> {
        self.get_page("/admin/buses", "buses", pagination).await
    }

    async fn delete_bus(&self, id: i64) -> Result<()> {
        self.execute(Method::DELETE, &format!("/admin/buses/{}", id), None)
            .await
    }

    async fn list_routes(&self, pagination: &PaginationParams) -> Result<Page<Route>> {
        self.get_page("/admin/routes", "routes", pagination).await
    }

    async fn delete_route(&self, id: i64) -> Result<()> {
        self.execute(Method::DELETE, &format!("/admin/routes/{}", id), None)
            .await
    }

    async fn list_tickets(&self, pagination: &PaginationParams) -> Result<Page<Ticket>> {
        self.get_page("/admin/tickets", "tickets", pagination).await
    }

    async fn list_transactions(
        &self,
        pagination: &PaginationParams,
    ) -> Result<Page<Transaction>> {
        self.get_page("/admin/transactions", "transactions", pagination)
            .await
    }
}

#[async_trait]
impl OwnerApi for TransitClient {
    async fn list_fleet(&self) -> Result<Vec<OwnerBus>> {
        self.get_list("/bus-owner/buses").await
    }

    async fn register_bus(&self, request: &RegisterBusRequest) -> Result<()> {
        let body = serde_json::to_value(request)?;
        self.execute(Method::POST, "/bus-owner/buses", Some(body))
            .await
    }

    async fn available_routes(&self) -> Result<Vec<Route>> {
        self.get_list("/bus-owner/routes").await
    }

    async fn analytics(&self) -> Result<OwnerAnalytics> {
        self.get_json("/bus-owner/analytics", &[]).await
    }

    async fn per_bus_analytics(&self) -> Result<Vec<BusAnalytics>> {
        self.get_list("/bus-owner/analytics/per-bus").await
    }
}
