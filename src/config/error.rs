//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid log format '{0}' (expected 'pretty' or 'json')")]
    InvalidLogFormat(String),

    #[error("Invalid URL for {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("Invalid Stripe API key format")]
    InvalidStripeKey,

    #[error("Deposit amount must be greater than zero")]
    InvalidDepositAmount,

    #[error("Invalid currency code '{0}'")]
    InvalidCurrency(String),

    #[error("Data directory required for file storage")]
    MissingDataDir,
}

/// Accepts absolute http(s) URLs only.
pub(crate) fn check_http_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
        _ => Err(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_url_check() {
        assert!(check_http_url("x", "https://calendly.com").is_ok());
        assert!(check_http_url("x", "http://localhost:3000").is_ok());
        assert!(check_http_url("x", "calendly.com").is_err());
        assert!(check_http_url("x", "https://").is_err());
    }
}
