//! HTTP adapter for the quote calculator.
//!
//! - `POST /api/quote/estimate` - Price a quote
//! - `POST /api/quote/proposal` - Submit the lead dialog and save a proposal

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::quote_routes;
