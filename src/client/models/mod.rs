//! Swift Transit API data models
//!
//! Typed contracts for every payload the CLI reads. Decoding happens at the
//! network boundary, so a shape mismatch is reported as an invalid response
//! instead of surfacing later as missing fields.

mod admin;
mod auth;
mod owner;

pub use admin::{
    Bus, BusOwner, CreateBusOwnerRequest, DashboardStats, Route, Ticket, Transaction,
    UpdateBusOwnerRequest, User,
};
pub use auth::{ErrorBody, LoginRequest, LoginResponse, Principal};
pub use owner::{BusAnalytics, OwnerAnalytics, OwnerBus, RegisterBusRequest};
