//! Bus-owner portal display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{BusAnalytics, OwnerAnalytics, OwnerBus};
use crate::output::formatters::{format_taka, or_missing};

/// Fleet bus display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FleetBusDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "REGISTRATION")]
    pub registration_number: String,
    #[tabled(rename = "ROUTE UP")]
    pub route_up: String,
    #[tabled(rename = "ROUTE DOWN")]
    pub route_down: String,
}

impl From<OwnerBus> for FleetBusDisplay {
    fn from(bus: OwnerBus) -> Self {
        Self {
            id: bus.id,
            registration_number: bus.registration_number,
            route_up: or_missing(bus.route_id_up),
            route_down: or_missing(bus.route_id_down),
        }
    }
}

/// One row of the revenue summary (today / week / month / all time)
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PeriodDisplay {
    #[tabled(rename = "PERIOD")]
    pub period: String,
    #[tabled(rename = "TICKETS")]
    pub tickets: u64,
    #[tabled(rename = "REVENUE")]
    pub revenue: String,
}

impl PeriodDisplay {
    /// Flatten fleet analytics into table rows
    pub fn rows(analytics: &OwnerAnalytics) -> Vec<Self> {
        let row = |period: &str, tickets: u64, revenue: f64| Self {
            period: period.to_string(),
            tickets,
            revenue: format_taka(revenue),
        };

        vec![
            row("Today", analytics.today.tickets, analytics.today.revenue),
            row("This Week", analytics.weekly.tickets, analytics.weekly.revenue),
            row(
                "This Month",
                analytics.monthly.tickets,
                analytics.monthly.revenue,
            ),
            row("All Time", analytics.total_tickets, analytics.total_revenue),
        ]
    }
}

/// Per-bus revenue row with its share of fleet revenue
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BusRevenueDisplay {
    #[tabled(rename = "BUS")]
    pub registration_number: String,
    #[tabled(rename = "TICKETS")]
    pub tickets: u64,
    #[tabled(rename = "REVENUE")]
    pub revenue: String,
    #[tabled(rename = "SHARE")]
    pub share: String,
}

impl BusRevenueDisplay {
    pub fn rows(buses: Vec<BusAnalytics>) -> Vec<Self> {
        let total: f64 = buses.iter().map(|b| b.revenue).sum();
        buses
            .into_iter()
            .map(|bus| {
                let share = if total > 0.0 {
                    format!("{:.1}%", bus.revenue / total * 100.0)
                } else {
                    "0.0%".to_string()
                };
                Self {
                    registration_number: bus.registration_number,
                    tickets: bus.tickets,
                    revenue: format_taka(bus.revenue),
                    share,
                }
            })
            .collect()
    }
}
