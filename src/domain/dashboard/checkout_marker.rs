//! One-shot guard for the "payment completed" navigation marker.
//!
//! ```text
//! NotYetProcessed ──observe_success──▶ Processed
//!        ▲                                 │
//!        └──────────── rearm ──────────────┘   (a new checkout was started)
//! ```
//!
//! The marker may be seen any number of times; only the sighting that moves
//! the guard out of `NotYetProcessed` carries side effects.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutMarker {
    #[default]
    NotYetProcessed,
    Processed,
}

/// Outcome of seeing the success marker once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerObservation {
    /// First sighting: clear the proposal and celebrate.
    FirstSighting,
    /// Already handled; do nothing.
    AlreadyProcessed,
}

impl CheckoutMarker {
    /// Records a sighting of the success marker and returns the new guard
    /// state together with what the caller should do about it.
    pub fn observe_success(self) -> (CheckoutMarker, MarkerObservation) {
        match self.transition_to(CheckoutMarker::Processed) {
            Ok(next) => (next, MarkerObservation::FirstSighting),
            Err(_) => (self, MarkerObservation::AlreadyProcessed),
        }
    }

    /// Arms the guard again for a fresh checkout attempt.
    pub fn rearm(self) -> CheckoutMarker {
        CheckoutMarker::NotYetProcessed
    }

    pub fn is_processed(&self) -> bool {
        matches!(self, CheckoutMarker::Processed)
    }
}

impl StateMachine for CheckoutMarker {
    fn can_transition_to(&self, target: &Self) -> bool {
        use CheckoutMarker::*;
        matches!(
            (self, target),
            (NotYetProcessed, Processed) | (Processed, NotYetProcessed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            CheckoutMarker::NotYetProcessed => vec![CheckoutMarker::Processed],
            CheckoutMarker::Processed => vec![CheckoutMarker::NotYetProcessed],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sighting_processes_marker() {
        let (next, outcome) = CheckoutMarker::default().observe_success();
        assert_eq!(next, CheckoutMarker::Processed);
        assert_eq!(outcome, MarkerObservation::FirstSighting);
    }

    #[test]
    fn repeated_sightings_fire_exactly_once() {
        let mut marker = CheckoutMarker::NotYetProcessed;
        let mut fired = 0;
        for _ in 0..5 {
            let (next, outcome) = marker.observe_success();
            if outcome == MarkerObservation::FirstSighting {
                fired += 1;
            }
            marker = next;
        }
        assert_eq!(fired, 1);
        assert!(marker.is_processed());
    }

    #[test]
    fn rearm_allows_next_checkout_to_fire() {
        let (processed, _) = CheckoutMarker::NotYetProcessed.observe_success();
        let (_, outcome) = processed.rearm().observe_success();
        assert_eq!(outcome, MarkerObservation::FirstSighting);
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&CheckoutMarker::NotYetProcessed).unwrap(),
            "\"not_yet_processed\""
        );
    }
}
