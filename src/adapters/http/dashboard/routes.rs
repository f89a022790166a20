//! Axum router configuration for dashboard endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{approve_milestone, load_dashboard};

/// Routes mounted at `/api/dashboard`.
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(load_dashboard))
        .route("/milestone/approve", post(approve_milestone))
}
