//! Display models for CLI output

pub mod display;

pub use display::{
    BusDisplay, BusOwnerDisplay, BusRevenueDisplay, FleetBusDisplay, PeriodDisplay, RouteDisplay,
    StatDisplay, TicketDisplay, TransactionDisplay, UserDisplay,
};
