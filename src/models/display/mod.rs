//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod admin;
mod owner;

pub use admin::{
    BusDisplay, BusOwnerDisplay, RouteDisplay, StatDisplay, TicketDisplay, TransactionDisplay,
    UserDisplay,
};
pub use owner::{BusRevenueDisplay, FleetBusDisplay, PeriodDisplay};
