//! Axum router configuration for proposal and checkout endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{accept_proposal, create_checkout, get_proposal};

/// Routes mounted at `/api/proposal`.
pub fn proposal_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_proposal))
        .route("/accept", post(accept_proposal))
}

/// Routes mounted at `/api/checkout`.
pub fn checkout_routes() -> Router<AppState> {
    Router::new().route("/", post(create_checkout))
}
