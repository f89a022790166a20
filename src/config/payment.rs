//! Payment configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::{check_http_url, ValidationError};
use super::server::Environment;

/// Payment configuration (Stripe)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Stripe API key. Absent outside production means the mock provider.
    pub stripe_api_key: Option<SecretString>,

    /// Kickoff deposit in the currency's minor unit
    #[serde(default = "default_deposit_amount")]
    pub deposit_amount_cents: u64,

    #[serde(default = "default_currency")]
    pub currency: String,

    /// Line item name on the payment page
    #[serde(default = "default_product_name")]
    pub product_name: String,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl PaymentConfig {
    fn api_key(&self) -> Option<&str> {
        self.stripe_api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .filter(|k| !k.is_empty())
    }

    /// True when a Stripe key is configured
    pub fn uses_stripe(&self) -> bool {
        self.api_key().is_some()
    }

    /// Check if using Stripe test mode
    pub fn is_test_mode(&self) -> bool {
        self.api_key().is_some_and(|k| k.starts_with("sk_test_"))
    }

    /// Check if using Stripe live mode
    pub fn is_live_mode(&self) -> bool {
        self.api_key().is_some_and(|k| k.starts_with("sk_live_"))
    }

    /// Validate payment configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        match self.api_key() {
            None if *environment == Environment::Production => {
                return Err(ValidationError::MissingRequired("PAYMENT__STRIPE_API_KEY"));
            }
            // Verify key prefixes for safety
            Some(key) if !key.starts_with("sk_") => {
                return Err(ValidationError::InvalidStripeKey);
            }
            _ => {}
        }

        if self.deposit_amount_cents == 0 {
            return Err(ValidationError::InvalidDepositAmount);
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(ValidationError::InvalidCurrency(self.currency.clone()));
        }
        if self.product_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__PRODUCT_NAME"));
        }
        check_http_url("payment.api_base_url", &self.api_base_url)?;

        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            stripe_api_key: None,
            deposit_amount_cents: default_deposit_amount(),
            currency: default_currency(),
            product_name: default_product_name(),
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_deposit_amount() -> u64 {
    50_000
}

fn default_currency() -> String {
    "usd".to_string()
}

fn default_product_name() -> String {
    "Project Kickoff Deposit".to_string()
}

fn default_api_base_url() -> String {
    "https://api.stripe.com".to_string()
}
