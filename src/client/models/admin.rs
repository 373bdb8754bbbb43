//! Admin portal resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform-wide totals shown on the admin dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_bus_owners: u64,
    #[serde(default)]
    pub total_buses: u64,
    #[serde(default)]
    pub total_routes: u64,
    #[serde(default)]
    pub total_tickets: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub today_tickets: u64,
    #[serde(default)]
    pub today_revenue: f64,
}

/// Passenger account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub nid: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_student: bool,
    #[serde(default)]
    pub balance: f64,
}

/// Bus owner account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusOwner {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating a bus owner
#[derive(Debug, Clone, Serialize)]
pub struct CreateBusOwnerRequest {
    pub username: String,
    pub password: String,
}

/// Request body for editing a bus owner.
///
/// The server always sets the username; the password changes only when sent.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateBusOwnerRequest {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Registered bus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bus {
    pub id: i64,
    pub registration_number: String,
    #[serde(default)]
    pub route_id_up: Option<i64>,
    #[serde(default)]
    pub route_id_down: Option<i64>,
    #[serde(default)]
    pub owner_id: Option<i64>,
}

/// Route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: i64,
    pub name: String,
}

/// Purchased ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub route_id: Option<i64>,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub start_destination: Option<String>,
    #[serde(default)]
    pub end_destination: Option<String>,
    #[serde(default)]
    pub fare: f64,
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Wallet transaction (credit, debit, purchase, refund)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
