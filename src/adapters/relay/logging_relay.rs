use async_trait::async_trait;

use crate::ports::{FormSubmission, LeadRelay, RelayError};

/// Relay used when no form endpoint is configured. Submissions are logged
/// and reported as delivered.
#[derive(Debug, Clone, Default)]
pub struct LoggingLeadRelay;

impl LoggingLeadRelay {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LeadRelay for LoggingLeadRelay {
    async fn submit(&self, submission: &FormSubmission) -> Result<(), RelayError> {
        tracing::info!(
            kind = submission.kind(),
            subject = %submission.subject(),
            "No form endpoint configured; submission logged only"
        );
        Ok(())
    }
}
