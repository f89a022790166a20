//! Axum router configuration for inquiry endpoints.

use axum::{routing::post, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{join_waitlist, send_contact};

/// Routes mounted at `/api`.
pub fn inquiry_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(send_contact))
        .route("/waitlist", post(join_waitlist))
}
