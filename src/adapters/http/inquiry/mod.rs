//! HTTP adapter for the contact form and solution waitlist.
//!
//! - `POST /api/contact` - Relay a project inquiry
//! - `POST /api/waitlist` - Relay a waitlist sign-up

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::inquiry_routes;
