//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Every value has a default, so the
//! estimator runs with zero environment; overrides use the
//! `TRADEWORKS_ROI` prefix with `__` as the nesting separator.
//!
//! # Example
//!
//! ```no_run
//! use tradeworks_roi::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod pricing;
mod reveal;

pub use error::ConfigError;
pub use pricing::PricingConfig;
pub use reveal::RevealSection;

use serde::Deserialize;

use crate::domain::foundation::ValidationError;

/// Root configuration for the estimator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Tier pricing, hourly rate, capture threshold.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Results animation timing.
    #[serde(default)]
    pub reveal: RevealSection,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// 1. Loads `.env` if present (development)
    /// 2. Reads variables with the `TRADEWORKS_ROI` prefix
    /// 3. Uses `__` to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `TRADEWORKS_ROI__PRICING__CREW_MONTHLY_DOLLARS=199`
    /// - `TRADEWORKS_ROI__REVEAL__DURATION_MS=800`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable cannot be parsed into the
    /// expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TRADEWORKS_ROI")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.pricing.validate()?;
        self.reveal.validate()?;
        Ok(())
    }
}
