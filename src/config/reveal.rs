//! Reveal animation configuration section.

use std::time::Duration;

use serde::Deserialize;

use crate::application::reveal::RevealConfig;
use crate::domain::foundation::ValidationError;

fn default_duration_ms() -> u64 {
    1_400
}

fn default_tick_count() -> u32 {
    28
}

/// `[reveal]` section: timing of the staged results animation.
#[derive(Debug, Clone, Deserialize)]
pub struct RevealSection {
    /// Total animation duration in milliseconds.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Number of frames published across the duration.
    #[serde(default = "default_tick_count")]
    pub tick_count: u32,
}

impl Default for RevealSection {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            tick_count: default_tick_count(),
        }
    }
}

impl RevealSection {
    /// Converts the section into the animation's timing config.
    pub fn to_config(&self) -> RevealConfig {
        RevealConfig::default()
            .with_duration(Duration::from_millis(self.duration_ms))
            .with_tick_count(self.tick_count)
    }

    /// Semantic validation: the animation must actually tick.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tick_count == 0 {
            return Err(ValidationError::invalid_format(
                "reveal.tick_count",
                "must be at least 1",
            ));
        }
        if self.duration_ms == 0 {
            return Err(ValidationError::invalid_format(
                "reveal.duration_ms",
                "must be positive",
            ));
        }
        Ok(())
    }
}
