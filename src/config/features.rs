//! Feature flags configuration

use serde::Deserialize;

use super::error::{check_http_url, ValidationError};

/// Feature flags and site-level switches
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Hide the workspace widgets while a proposal awaits acceptance
    #[serde(default = "default_true")]
    pub suppress_dashboard_when_proposal_pending: bool,

    /// Scheduling link offered after a lead is submitted
    #[serde(default = "default_booking_url")]
    pub booking_url: String,

    /// Staging link shown in the workspace, if any
    pub live_preview_url: Option<String>,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,
}

impl FeatureFlags {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_http_url("features.booking_url", &self.booking_url)?;
        if let Some(url) = &self.live_preview_url {
            check_http_url("features.live_preview_url", url)?;
        }
        Ok(())
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            suppress_dashboard_when_proposal_pending: true,
            booking_url: default_booking_url(),
            live_preview_url: None,
            verbose_errors: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_booking_url() -> String {
    "https://calendly.com".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(flags.suppress_dashboard_when_proposal_pending);
        assert_eq!(flags.booking_url, "https://calendly.com");
        assert!(flags.live_preview_url.is_none());
        assert!(!flags.verbose_errors);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{
            "suppress_dashboard_when_proposal_pending": false,
            "live_preview_url": "https://staging.example.com"
        }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.suppress_dashboard_when_proposal_pending);
        assert_eq!(flags.booking_url, "https://calendly.com");
        assert_eq!(
            flags.live_preview_url.as_deref(),
            Some("https://staging.example.com")
        );
        assert!(flags.validate().is_ok());
    }

    #[test]
    fn test_invalid_preview_url() {
        let flags = FeatureFlags {
            live_preview_url: Some("staging".to_string()),
            ..Default::default()
        };
        assert!(flags.validate().is_err());
    }
}
