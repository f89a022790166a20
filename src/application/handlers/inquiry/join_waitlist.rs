//! JoinWaitlistHandler - Command handler for solution waitlist sign-ups.

use std::sync::Arc;

use crate::application::ApplicationError;
use crate::domain::inquiry::{WaitlistForm, WaitlistSignup};
use crate::ports::{FormSubmission, LeadRelay};

pub struct JoinWaitlistHandler {
    relay: Arc<dyn LeadRelay>,
}

impl JoinWaitlistHandler {
    pub fn new(relay: Arc<dyn LeadRelay>) -> Self {
        Self { relay }
    }

    pub async fn handle(&self, form: WaitlistForm) -> Result<WaitlistSignup, ApplicationError> {
        let signup = WaitlistSignup::from_form(&form).map_err(ApplicationError::InvalidForm)?;

        self.relay
            .submit(&FormSubmission::Waitlist(signup.clone()))
            .await?;

        tracing::info!(solution = %signup.solution_title, "Waitlist sign-up relayed");
        Ok(signup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::relay::MockLeadRelay;

    #[tokio::test]
    async fn relays_with_waitlist_subject() {
        let relay = MockLeadRelay::new();
        let handler = JoinWaitlistHandler::new(Arc::new(relay.clone()));

        handler
            .handle(WaitlistForm {
                email: "joan@clarke.uk".to_string(),
                solution_title: "Inventory Copilot".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            relay.submissions()[0].subject(),
            "Waitlist: Inventory Copilot"
        );
    }

    #[tokio::test]
    async fn missing_email_is_rejected() {
        let handler = JoinWaitlistHandler::new(Arc::new(MockLeadRelay::new()));
        let err = handler
            .handle(WaitlistForm {
                email: String::new(),
                solution_title: "Inventory Copilot".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidForm(ref e) if e.len() == 1));
    }
}
