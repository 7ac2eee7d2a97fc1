//! TeamSize value object - bounded crew headcount.
//!
//! The supported range is 1..=100. Out-of-range input at the survey
//! boundary is clamped (a UX guard, not an error); `try_new` is available
//! where rejecting is preferable.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Number of people on the prospect's team, 1..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamSize(u32);

impl TeamSize {
    /// Smallest supported team.
    pub const MIN: u32 = 1;

    /// Largest supported team.
    pub const MAX: u32 = 100;

    /// Creates a TeamSize, clamping to the supported range.
    pub fn new(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Creates a TeamSize, returning an error if out of range.
    pub fn try_new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "team_size",
                i64::from(Self::MIN),
                i64::from(Self::MAX),
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the headcount.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for TeamSize {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for TeamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
