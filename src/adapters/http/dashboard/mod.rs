//! HTTP adapter for the client dashboard.
//!
//! - `GET /api/dashboard` - Load the dashboard; `?payment=success` is
//!   consumed at most once per checkout
//! - `POST /api/dashboard/milestone/approve` - Sign off the current milestone

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::dashboard_routes;
