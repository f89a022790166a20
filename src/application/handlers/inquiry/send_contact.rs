//! SendContactHandler - Command handler for the contact form.

use std::sync::Arc;

use crate::application::ApplicationError;
use crate::domain::inquiry::{ContactForm, ContactMessage};
use crate::ports::{FormSubmission, LeadRelay};

pub struct SendContactHandler {
    relay: Arc<dyn LeadRelay>,
}

impl SendContactHandler {
    pub fn new(relay: Arc<dyn LeadRelay>) -> Self {
        Self { relay }
    }

    /// Validates and relays. Delivery failures are returned so the form can
    /// show an error and let the visitor resend.
    pub async fn handle(&self, form: ContactForm) -> Result<ContactMessage, ApplicationError> {
        let message = ContactMessage::from_form(&form).map_err(ApplicationError::InvalidForm)?;

        self.relay
            .submit(&FormSubmission::Contact(message.clone()))
            .await?;

        tracing::info!(project_type = %message.project_type, "Contact inquiry relayed");
        Ok(message)
    }
}
