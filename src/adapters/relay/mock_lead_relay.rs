//! Mock relay for tests. Records submissions and can be told to fail.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::ports::{FormSubmission, LeadRelay, RelayError};

#[derive(Default)]
struct MockState {
    submissions: Vec<FormSubmission>,
    reject_with_status: Option<u16>,
}

#[derive(Default, Clone)]
pub struct MockLeadRelay {
    inner: Arc<Mutex<MockState>>,
}

impl MockLeadRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// A relay whose endpoint answers every submission with `status`.
    pub fn rejecting(status: u16) -> Self {
        let relay = Self::new();
        relay.state().reject_with_status = Some(status);
        relay
    }

    pub fn submissions(&self) -> Vec<FormSubmission> {
        self.state().submissions.clone()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl LeadRelay for MockLeadRelay {
    async fn submit(&self, submission: &FormSubmission) -> Result<(), RelayError> {
        let mut state = self.state();
        state.submissions.push(submission.clone());
        match state.reject_with_status {
            Some(status) => Err(RelayError::Rejected { status }),
            None => Ok(()),
        }
    }
}
