//! CostEntry - the tagged union behind every survey answer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, TeamSize};

/// What one (category, option) pair costs the prospect each month.
///
/// Exactly one shape exists per pair: `Direct` for the baseline software
/// option of each category, `Hidden` for every manual practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CostEntry {
    /// An explicit recurring cash cost for an existing baseline tool.
    Direct {
        /// Monthly fee billed per seat.
        per_seat: Money,
        /// Flat monthly platform fee, if any.
        base: Money,
    },

    /// An implied cost: money leaked plus staff hours wasted each month.
    Hidden {
        /// Estimated dollars lost per month to the practice.
        monthly: Money,
        /// Staff hours burned per month.
        hours_per_month: u32,
    },
}

impl CostEntry {
    /// Returns true for the direct (baseline software) shape.
    pub fn is_direct(&self) -> bool {
        matches!(self, CostEntry::Direct { .. })
    }

    /// Returns the monthly cash cost of a direct entry for a team, or
    /// zero for hidden entries.
    pub fn direct_monthly_cost(&self, team_size: TeamSize) -> Money {
        match self {
            CostEntry::Direct { per_seat, base } => *per_seat * team_size.value() + *base,
            CostEntry::Hidden { .. } => Money::ZERO,
        }
    }

    /// Returns the hidden monthly dollar cost, or zero for direct entries.
    pub fn hidden_monthly_cost(&self) -> Money {
        match self {
            CostEntry::Direct { .. } => Money::ZERO,
            CostEntry::Hidden { monthly, .. } => *monthly,
        }
    }

    /// Returns the hours wasted per month, always zero for direct entries.
    pub fn hours_per_month(&self) -> u32 {
        match self {
            CostEntry::Direct { .. } => 0,
            CostEntry::Hidden { hours_per_month, .. } => *hours_per_month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_cost_scales_with_team_size() {
        let entry = CostEntry::Direct {
            per_seat: Money::from_dollars(7),
            base: Money::from_dollars(20),
        };
        assert_eq!(
            entry.direct_monthly_cost(TeamSize::new(5)),
            Money::from_dollars(55)
        );
        assert_eq!(
            entry.direct_monthly_cost(TeamSize::new(12)),
            Money::from_dollars(104)
        );
    }

    #[test]
    fn hidden_entry_has_no_direct_cost() {
        let entry = CostEntry::Hidden {
            monthly: Money::from_dollars(450),
            hours_per_month: 12,
        };
        assert_eq!(entry.direct_monthly_cost(TeamSize::new(50)), Money::ZERO);
        assert_eq!(entry.hidden_monthly_cost(), Money::from_dollars(450));
        assert_eq!(entry.hours_per_month(), 12);
    }

    #[test]
    fn direct_entry_contributes_zero_hours() {
        let entry = CostEntry::Direct {
            per_seat: Money::from_dollars(5),
            base: Money::ZERO,
        };
        assert_eq!(entry.hours_per_month(), 0);
        assert_eq!(entry.hidden_monthly_cost(), Money::ZERO);
        assert!(entry.is_direct());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let entry = CostEntry::Hidden {
            monthly: Money::from_dollars(300),
            hours_per_month: 8,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "hidden");
        assert_eq!(json["hours_per_month"], 8);
    }
}
