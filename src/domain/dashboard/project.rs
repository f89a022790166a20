//! Project status and milestone tracking shown on the client dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Whether the kickoff deposit has been paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    AwaitingPayment,
    Active,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::AwaitingPayment => "awaiting_payment",
            ProjectStatus::Active => "active",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ProjectStatus::Active)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    #[default]
    Pending,
    Completed,
}

impl StateMachine for MilestoneStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (MilestoneStatus::Pending, MilestoneStatus::Completed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            MilestoneStatus::Pending => vec![MilestoneStatus::Completed],
            MilestoneStatus::Completed => vec![],
        }
    }
}

/// A deliverable awaiting client sign-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub status: MilestoneStatus,
}

impl Milestone {
    pub const FIRST_PHASE: &'static str = "Phase 1: UI/UX Design";

    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: MilestoneStatus::Pending,
        }
    }

    /// Marks the milestone approved. Returns false when it already was.
    pub fn approve(&mut self) -> bool {
        match self.status.transition_to(MilestoneStatus::Completed) {
            Ok(next) => {
                self.status = next;
                true
            }
            Err(_) => false,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(())
    }
}

impl Default for Milestone {
    fn default() -> Self {
        Self::new(Self::FIRST_PHASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_milestone_is_first_phase_pending() {
        let milestone = Milestone::default();
        assert_eq!(milestone.title, "Phase 1: UI/UX Design");
        assert_eq!(milestone.status, MilestoneStatus::Pending);
        assert!(!milestone.is_completed());
    }

    #[test]
    fn approve_completes_once() {
        let mut milestone = Milestone::default();
        assert!(milestone.approve());
        assert!(milestone.is_completed());
        assert!(!milestone.approve());
        assert_eq!(milestone.status, MilestoneStatus::Completed);
    }

    #[test]
    fn completed_cannot_revert() {
        assert!(MilestoneStatus::Completed
            .transition_to(MilestoneStatus::Pending)
            .is_err());
    }

    #[test]
    fn project_status_strings() {
        assert_eq!(ProjectStatus::default().as_str(), "awaiting_payment");
        assert_eq!(ProjectStatus::Active.to_string(), "active");
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Active).unwrap(),
            "\"active\""
        );
    }

    #[test]
    fn blank_title_fails_validation() {
        assert!(Milestone::new("  ").validate().is_err());
    }
}
