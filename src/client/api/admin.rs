//! Admin portal API trait

use async_trait::async_trait;

use crate::client::models::{
    Bus, BusOwner, CreateBusOwnerRequest, DashboardStats, Route, Ticket, Transaction,
    UpdateBusOwnerRequest, User,
};
use crate::client::pagination::{Page, PaginationParams};
use crate::error::Result;

/// Operations behind `/admin/*`. All require an admin session.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn dashboard_stats(&self) -> Result<DashboardStats>;

    // ========================================================================
    // Users
    // ========================================================================

    async fn list_users(&self, pagination: &PaginationParams) -> Result<Page<User>>;

    async fn delete_user(&self, id: i64) -> Result<()>;

    // ========================================================================
    // Bus owners
    // ========================================================================

    async fn list_bus_owners(&self, pagination: &PaginationParams) -> Result<Page<BusOwner>>;

    async fn create_bus_owner(&self, request: &CreateBusOwnerRequest) -> Result<()>;

    async fn update_bus_owner(&self, id: i64, request: &UpdateBusOwnerRequest) -> Result<()>;

    async fn delete_bus_owner(&self, id: i64) -> Result<()>;

    // ========================================================================
    // Buses & routes
    // ========================================================================

    async fn list_buses(&self, pagination: &PaginationParams) -> Result<Page<Bus>>;

    async fn delete_bus(&self, id: i64) -> Result<()>;

    async fn list_routes(&self, pagination: &PaginationParams) -> Result<Page<Route>>;

    async fn delete_route(&self, id: i64) -> Result<()>;

    // ========================================================================
    // Tickets & transactions
    // ========================================================================

    async fn list_tickets(&self, pagination: &PaginationParams) -> Result<Page<Ticket>>;

    async fn list_transactions(&self, pagination: &PaginationParams)
    -> Result<Page<Transaction>>;
}
