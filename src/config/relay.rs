//! Form relay configuration

use serde::Deserialize;

use super::error::{check_http_url, ValidationError};

/// Where proposal, contact and waitlist submissions are forwarded
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// Form-relay endpoint. When unset, submissions are only logged.
    pub form_endpoint: Option<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl RelayConfig {
    pub fn endpoint(&self) -> Option<&str> {
        self.form_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(endpoint) = self.endpoint() {
            check_http_url("relay.form_endpoint", endpoint)?;
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            form_endpoint: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_request_timeout() -> u64 {
    10
}
