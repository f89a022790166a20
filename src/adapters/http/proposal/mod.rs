//! HTTP adapter for the proposal page and checkout hand-off.
//!
//! - `GET /api/proposal` - Render the pending proposal, if any
//! - `POST /api/proposal/accept` - Start checkout for the pending proposal
//! - `POST /api/checkout` - Start checkout for an explicit project type

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::{checkout_routes, proposal_routes};
