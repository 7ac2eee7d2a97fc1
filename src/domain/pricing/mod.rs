//! Pricing - subscription tiers and the team-size step function.
//!
//! Two tiers only: Crew for small teams, Company from the boundary up.
//! The step function is pure, total over the supported team-size range,
//! and monotonic non-decreasing; the boundary value belongs to the
//! higher tier.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Money, TeamSize, ValidationError};

/// The two subscription tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Crew,
    Company,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Crew => write!(f, "Crew"),
            Tier::Company => write!(f, "Company"),
        }
    }
}

/// Pricing constants for the comparison: tier prices, the tier boundary,
/// the hourly rate used to value recovered time, and the annual-savings
/// threshold above which the email-capture prompt is suggested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTable {
    pub crew_monthly: Money,
    pub company_monthly: Money,
    /// Team sizes at or above this belong to the Company tier.
    pub company_boundary: u32,
    pub hourly_rate: Money,
    pub capture_threshold_annual: Money,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            crew_monthly: Money::from_dollars(249),
            company_monthly: Money::from_dollars(399),
            company_boundary: 8,
            hourly_rate: Money::from_dollars(35),
            capture_threshold_annual: Money::from_dollars(5_000),
        }
    }
}

impl PricingTable {
    /// Returns the tier a team falls into.
    pub fn tier_for(&self, team_size: TeamSize) -> Tier {
        if team_size.value() >= self.company_boundary {
            Tier::Company
        } else {
            Tier::Crew
        }
    }

    /// The step function: monthly subscription price for a team.
    pub fn tier_cost(&self, team_size: TeamSize) -> Money {
        match self.tier_for(team_size) {
            Tier::Crew => self.crew_monthly,
            Tier::Company => self.company_monthly,
        }
    }

    /// Semantic validation: prices positive, step function monotonic,
    /// boundary inside the supported team-size range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.crew_monthly.is_positive() || !self.company_monthly.is_positive() {
            return Err(ValidationError::invalid_format(
                "pricing",
                "tier prices must be positive",
            ));
        }
        if self.company_monthly < self.crew_monthly {
            return Err(ValidationError::invalid_format(
                "pricing",
                "Company tier must not undercut Crew tier",
            ));
        }
        if !(TeamSize::MIN..=TeamSize::MAX).contains(&self.company_boundary) {
            return Err(ValidationError::out_of_range(
                "company_boundary",
                i64::from(TeamSize::MIN),
                i64::from(TeamSize::MAX),
                i64::from(self.company_boundary),
            ));
        }
        if !self.hourly_rate.is_positive() {
            return Err(ValidationError::invalid_format(
                "hourly_rate",
                "hourly rate must be positive",
            ));
        }
        Ok(())
    }
}
