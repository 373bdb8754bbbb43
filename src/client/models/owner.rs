//! Bus-owner portal resources

use serde::{Deserialize, Serialize};

/// A bus in the owner's fleet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerBus {
    pub id: i64,
    pub registration_number: String,
    #[serde(default)]
    pub route_id_up: Option<i64>,
    #[serde(default)]
    pub route_id_down: Option<i64>,
}

/// Request body for registering a bus
#[derive(Debug, Clone, Serialize)]
pub struct RegisterBusRequest {
    pub registration_number: String,
    pub password: String,
    pub route_id_up: i64,
    pub route_id_down: i64,
}

/// Revenue and ticket totals for one period
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PeriodAnalytics {
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub tickets: u64,
}

/// Fleet-wide revenue summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OwnerAnalytics {
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_tickets: u64,
    #[serde(default)]
    pub today: PeriodAnalytics,
    #[serde(default)]
    pub weekly: PeriodAnalytics,
    #[serde(default)]
    pub monthly: PeriodAnalytics,
}

/// Revenue for a single bus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusAnalytics {
    pub registration_number: String,
    #[serde(default)]
    pub tickets: u64,
    #[serde(default)]
    pub revenue: f64,
}
