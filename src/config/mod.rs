//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `STUDIO_DESK` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working
//! development setup (in-memory storage, mock payments, logged relay).
//!
//! # Example
//!
//! ```no_run
//! use studio_desk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod features;
mod payment;
mod relay;
mod server;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use payment::PaymentConfig;
pub use relay::RelayConfig;
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment configuration (Stripe)
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Form relay for leads, inquiries and waitlist signups
    #[serde(default)]
    pub relay: RelayConfig,

    /// Per-client record storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `STUDIO_DESK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `STUDIO_DESK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `STUDIO_DESK__PAYMENT__STRIPE_API_KEY=...` -> `payment.stripe_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STUDIO_DESK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.payment.validate(&self.server.environment)?;
        self.relay.validate()?;
        self.storage.validate()?;
        self.features.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
