//! Pricing configuration section.
//!
//! Every value has a production default, so the engine runs with zero
//! environment. Amounts are whole dollars in the environment for
//! readability; they become cents-backed [`Money`] in the domain table.

use serde::Deserialize;

use crate::domain::foundation::{Money, ValidationError};
use crate::domain::pricing::PricingTable;

fn default_crew_monthly() -> i64 {
    249
}

fn default_company_monthly() -> i64 {
    399
}

fn default_company_boundary() -> u32 {
    8
}

fn default_hourly_rate() -> i64 {
    35
}

fn default_capture_threshold() -> i64 {
    5_000
}

/// `[pricing]` section, overridable per variable, e.g.
/// `TRADEWORKS_ROI__PRICING__CREW_MONTHLY_DOLLARS=199`.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_crew_monthly")]
    pub crew_monthly_dollars: i64,

    #[serde(default = "default_company_monthly")]
    pub company_monthly_dollars: i64,

    /// Team sizes at or above this belong to the Company tier.
    #[serde(default = "default_company_boundary")]
    pub company_boundary: u32,

    /// Dollar value assigned to one recovered staff hour.
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate_dollars: i64,

    /// Annual savings above this suggest the email-capture prompt.
    #[serde(default = "default_capture_threshold")]
    pub capture_threshold_annual_dollars: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            crew_monthly_dollars: default_crew_monthly(),
            company_monthly_dollars: default_company_monthly(),
            company_boundary: default_company_boundary(),
            hourly_rate_dollars: default_hourly_rate(),
            capture_threshold_annual_dollars: default_capture_threshold(),
        }
    }
}

impl PricingConfig {
    /// Converts the section into the domain pricing table.
    pub fn to_table(&self) -> PricingTable {
        PricingTable {
            crew_monthly: Money::from_dollars(self.crew_monthly_dollars),
            company_monthly: Money::from_dollars(self.company_monthly_dollars),
            company_boundary: self.company_boundary,
            hourly_rate: Money::from_dollars(self.hourly_rate_dollars),
            capture_threshold_annual: Money::from_dollars(self.capture_threshold_annual_dollars),
        }
    }

    /// Semantic validation, delegated to the domain table's rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_table().validate()
    }
}
