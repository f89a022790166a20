//! DTOs for dashboard endpoints.

use serde::{Deserialize, Serialize};

use crate::application::ApproveMilestoneResult;
use crate::domain::dashboard::Milestone;

/// Query string of `GET /api/dashboard`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub payment: Option<String>,
}

impl DashboardQuery {
    /// True only for the exact `payment=success` marker.
    pub fn payment_succeeded(&self) -> bool {
        self.payment.as_deref() == Some("success")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApproveMilestoneResponse {
    pub milestone: Milestone,
    pub changed: bool,
}

impl From<ApproveMilestoneResult> for ApproveMilestoneResponse {
    fn from(result: ApproveMilestoneResult) -> Self {
        Self {
            milestone: result.milestone,
            changed: result.changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_success_value_counts_as_marker() {
        let query = |payment: Option<&str>| DashboardQuery {
            payment: payment.map(str::to_string),
        };
        assert!(query(Some("success")).payment_succeeded());
        assert!(!query(Some("cancelled")).payment_succeeded());
        assert!(!query(Some("")).payment_succeeded());
        assert!(!query(None).payment_succeeded());
    }
}
