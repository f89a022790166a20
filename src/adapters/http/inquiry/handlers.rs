//! HTTP handlers for inquiry endpoints.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::inquiry::{ContactForm, WaitlistForm};

use super::dto::{ContactResponse, WaitlistResponse};

/// POST /api/contact - Relay a project inquiry
pub async fn send_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<impl IntoResponse, ApiError> {
    let message = state.send_contact_handler().handle(form).await?;
    Ok(Json(ContactResponse::from(message)))
}

/// POST /api/waitlist - Relay a waitlist sign-up
pub async fn join_waitlist(
    State(state): State<AppState>,
    Json(form): Json<WaitlistForm>,
) -> Result<impl IntoResponse, ApiError> {
    let signup = state.join_waitlist_handler().handle(form).await?;
    Ok(Json(WaitlistResponse::from(signup)))
}
