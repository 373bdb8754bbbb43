//! Admin portal display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Bus, BusOwner, DashboardStats, Route, Ticket, Transaction, User};
use crate::output::formatters::{MISSING, format_datetime, format_taka, or_missing};

/// One metric on the admin dashboard
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct StatDisplay {
    #[tabled(rename = "METRIC")]
    pub metric: String,
    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl StatDisplay {
    pub fn rows(stats: &DashboardStats) -> Vec<Self> {
        let row = |metric: &str, value: String| Self {
            metric: metric.to_string(),
            value,
        };

        vec![
            row("Users", stats.total_users.to_string()),
            row("Bus owners", stats.total_bus_owners.to_string()),
            row("Buses", stats.total_buses.to_string()),
            row("Routes", stats.total_routes.to_string()),
            row("Tickets", stats.total_tickets.to_string()),
            row("Revenue", format_taka(stats.total_revenue)),
            row("Tickets today", stats.today_tickets.to_string()),
            row("Revenue today", format_taka(stats.today_revenue)),
        ]
    }
}

/// Passenger display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "EMAIL")]
    pub email: String,
    #[tabled(rename = "MOBILE")]
    pub mobile: String,
    #[tabled(rename = "STUDENT")]
    pub student: String,
    #[tabled(rename = "BALANCE")]
    pub balance: String,
}

impl From<User> for UserDisplay {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: or_missing(Some(user.name)),
            email: or_missing(Some(user.email)),
            mobile: or_missing(Some(user.mobile)),
            student: if user.is_student { "yes" } else { "no" }.to_string(),
            balance: format_taka(user.balance),
        }
    }
}

/// Bus owner display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BusOwnerDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "USERNAME")]
    pub username: String,
    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<BusOwner> for BusOwnerDisplay {
    fn from(owner: BusOwner) -> Self {
        Self {
            id: owner.id,
            username: owner.username,
            created: format_datetime(owner.created_at),
        }
    }
}

/// Bus display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BusDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "REGISTRATION")]
    pub registration_number: String,
    #[tabled(rename = "ROUTE UP")]
    pub route_up: String,
    #[tabled(rename = "ROUTE DOWN")]
    pub route_down: String,
    #[tabled(rename = "OWNER")]
    pub owner: String,
}

impl From<Bus> for BusDisplay {
    fn from(bus: Bus) -> Self {
        Self {
            id: bus.id,
            registration_number: bus.registration_number,
            route_up: or_missing(bus.route_id_up),
            route_down: or_missing(bus.route_id_down),
            owner: or_missing(bus.owner_id),
        }
    }
}

/// Route display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RouteDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "NAME")]
    pub name: String,
}

impl From<Route> for RouteDisplay {
    fn from(route: Route) -> Self {
        Self {
            id: route.id,
            name: route.name,
        }
    }
}

/// Ticket display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TicketDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "USER")]
    pub user: String,
    #[tabled(rename = "BUS")]
    pub bus: String,
    #[tabled(rename = "TRIP")]
    pub trip: String,
    #[tabled(rename = "FARE")]
    pub fare: String,
    #[tabled(rename = "STATUS")]
    pub status: String,
    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<Ticket> for TicketDisplay {
    fn from(ticket: Ticket) -> Self {
        let trip = match (&ticket.start_destination, &ticket.end_destination) {
            (Some(from), Some(to)) => format!("{} → {}", from, to),
            (Some(from), None) => format!("{} → {}", from, MISSING),
            (None, Some(to)) => format!("{} → {}", MISSING, to),
            (None, None) => MISSING.to_string(),
        };

        Self {
            id: ticket.id,
            user: or_missing(ticket.user_id),
            bus: or_missing(ticket.registration_number),
            trip,
            fare: format_taka(ticket.fare),
            status: or_missing(Some(ticket.payment_status)),
            created: format_datetime(ticket.created_at),
        }
    }
}

/// Transaction display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TransactionDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "USER")]
    pub user_id: i64,
    #[tabled(rename = "TYPE")]
    pub kind: String,
    #[tabled(rename = "AMOUNT")]
    pub amount: String,
    #[tabled(rename = "METHOD")]
    pub method: String,
    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<Transaction> for TransactionDisplay {
    fn from(txn: Transaction) -> Self {
        Self {
            id: txn.id,
            user_id: txn.user_id,
            kind: txn.kind,
            amount: format_taka(txn.amount),
            method: or_missing(Some(txn.payment_method)),
            description: or_missing(Some(txn.description)),
            created: format_datetime(txn.created_at),
        }
    }
}
