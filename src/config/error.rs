//! Configuration error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}
