//! Bus-owner portal API trait

use async_trait::async_trait;

use crate::client::models::{BusAnalytics, OwnerAnalytics, OwnerBus, RegisterBusRequest, Route};
use crate::error::Result;

/// Operations behind `/bus-owner/*`. All require an owner session.
#[async_trait]
pub trait OwnerApi: Send + Sync {
    /// Buses registered by the signed-in owner
    async fn list_fleet(&self) -> Result<Vec<OwnerBus>>;

    /// Register a new bus on an up/down route pair
    async fn register_bus(&self, request: &RegisterBusRequest) -> Result<()>;

    /// Routes available for registration
    async fn available_routes(&self) -> Result<Vec<Route>>;

    async fn analytics(&self) -> Result<OwnerAnalytics>;

    async fn per_bus_analytics(&self) -> Result<Vec<BusAnalytics>>;
}
