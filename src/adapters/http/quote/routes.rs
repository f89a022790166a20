//! Axum router configuration for quote endpoints.

use axum::{routing::post, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{estimate_quote, submit_proposal};

/// Routes mounted at `/api/quote`.
pub fn quote_routes() -> Router<AppState> {
    Router::new()
        .route("/estimate", post(estimate_quote))
        .route("/proposal", post(submit_proposal))
}
