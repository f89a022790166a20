//! HTTP handlers for dashboard endpoints.

use axum::extract::{Json, Query, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::ClientIdentity;
use crate::adapters::http::state::AppState;
use crate::application::{ApproveMilestoneCommand, LoadDashboardCommand};

use super::dto::{ApproveMilestoneResponse, DashboardQuery};

/// GET /api/dashboard - Load the dashboard view
///
/// When `canonicalUrl` is present in the response the browser should
/// replace its location with it, dropping the payment marker.
pub async fn load_dashboard(
    State(state): State<AppState>,
    ClientIdentity(client_id): ClientIdentity,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let command = LoadDashboardCommand {
        client_id,
        payment_marker: query.payment_succeeded(),
    };

    let view = state.load_dashboard_handler().handle(command).await?;
    Ok(Json(view))
}

/// POST /api/dashboard/milestone/approve - Approve the current milestone
pub async fn approve_milestone(
    State(state): State<AppState>,
    ClientIdentity(client_id): ClientIdentity,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .approve_milestone_handler()
        .handle(ApproveMilestoneCommand { client_id })
        .await?;

    Ok(Json(ApproveMilestoneResponse::from(result)))
}
