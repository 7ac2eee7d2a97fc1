//! EstimateResult - the full cost comparison.
//!
//! A pure projection of the selection state and the static tables. It
//! holds no independent state; callers recompute it on every change.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Category, Money, PracticeOption};
use crate::domain::pricing::Tier;

/// One itemized row of the comparison, one per answered category.
/// Exactly one of `direct_cost`/`hidden_cost` is non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    pub category: Category,
    pub option: PracticeOption,
    pub label: String,
    pub direct_cost: Money,
    pub hidden_cost: Money,
    pub hours_wasted: u32,
}

impl BreakdownLine {
    /// Returns true if this line reflects an existing baseline tool.
    pub fn is_baseline(&self) -> bool {
        self.option.is_baseline()
    }
}

/// Which results pitch applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Positive savings: lead with the monthly waste figure.
    MonthlyWaste,
    /// No savings to claim; the setup is already reasonable.
    AlreadyOptimized,
    /// No savings and every answer is paid software: pitch consolidation.
    ConsolidateTools,
}

impl Verdict {
    /// Returns the results headline for this branch.
    pub fn headline(&self) -> &'static str {
        match self {
            Verdict::MonthlyWaste => "Here's what your current setup is costing you",
            Verdict::AlreadyOptimized => "Your setup is already in good shape",
            Verdict::ConsolidateTools => "You could consolidate six tools into one",
        }
    }
}

/// The full comparison against the Tradeworks subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub total_direct_cost: Money,
    pub total_hidden_cost: Money,
    pub total_current_spending: Money,
    pub tier: Tier,
    pub tier_cost: Money,
    /// May be zero or negative when the prospect already spends less
    /// than the subscription would cost.
    pub monthly_savings: Money,
    pub annual_savings: Money,
    /// Savings relative to subscription cost, rounded to whole percent.
    pub roi_percent: i32,
    pub hours_recovered_monthly: u32,
    pub hours_recovered_annually: u32,
    pub value_of_time_recovered: Money,
    /// One line per answered category, in canonical survey order.
    pub breakdown: Vec<BreakdownLine>,
}

impl EstimateResult {
    /// Derives the presentation branch. Not stored, so it can never go
    /// stale against the numbers.
    pub fn verdict(&self) -> Verdict {
        if self.monthly_savings.is_positive() {
            Verdict::MonthlyWaste
        } else if self.breakdown.len() == Category::COUNT
            && self.breakdown.iter().all(BreakdownLine::is_baseline)
        {
            Verdict::ConsolidateTools
        } else {
            Verdict::AlreadyOptimized
        }
    }

    /// Returns true when the projected annual savings are large enough
    /// to suggest the email-capture prompt.
    pub fn should_prompt_capture(&self, threshold_annual: Money) -> bool {
        self.annual_savings > threshold_annual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(option: PracticeOption, direct: i64, hidden: i64, hours: u32) -> BreakdownLine {
        BreakdownLine {
            category: option.category(),
            option,
            label: option.label().to_string(),
            direct_cost: Money::from_dollars(direct),
            hidden_cost: Money::from_dollars(hidden),
            hours_wasted: hours,
        }
    }

    fn result_with(monthly_savings: i64, breakdown: Vec<BreakdownLine>) -> EstimateResult {
        EstimateResult {
            total_direct_cost: Money::ZERO,
            total_hidden_cost: Money::ZERO,
            total_current_spending: Money::ZERO,
            tier: Tier::Crew,
            tier_cost: Money::from_dollars(249),
            monthly_savings: Money::from_dollars(monthly_savings),
            annual_savings: Money::from_dollars(monthly_savings * 12),
            roi_percent: 0,
            hours_recovered_monthly: 0,
            hours_recovered_annually: 0,
            value_of_time_recovered: Money::ZERO,
            breakdown,
        }
    }

    fn all_baseline_breakdown() -> Vec<BreakdownLine> {
        [
            PracticeOption::TimeTrackingSoftware,
            PracticeOption::ProjectSoftware,
            PracticeOption::CrmSoftware,
            PracticeOption::SafetySoftware,
            PracticeOption::SchedulingSoftware,
            PracticeOption::DocumentSoftware,
        ]
        .into_iter()
        .map(|o| line(o, 50, 0, 0))
        .collect()
    }

    #[test]
    fn positive_savings_selects_monthly_waste() {
        let result = result_with(2_551, vec![line(PracticeOption::CallsAndTexts, 0, 600, 16)]);
        assert_eq!(result.verdict(), Verdict::MonthlyWaste);
    }

    #[test]
    fn non_positive_savings_with_all_baselines_selects_consolidation() {
        let result = result_with(-19, all_baseline_breakdown());
        assert_eq!(result.verdict(), Verdict::ConsolidateTools);
    }

    #[test]
    fn non_positive_savings_with_mixed_answers_selects_already_optimized() {
        let mut breakdown = all_baseline_breakdown();
        breakdown[2] = line(PracticeOption::SpreadsheetContactList, 0, 250, 6);
        let result = result_with(-19, breakdown);
        assert_eq!(result.verdict(), Verdict::AlreadyOptimized);
    }

    #[test]
    fn zero_savings_is_not_monthly_waste() {
        let result = result_with(0, vec![]);
        assert_eq!(result.verdict(), Verdict::AlreadyOptimized);
    }

    #[test]
    fn partial_all_baseline_breakdown_is_not_consolidation() {
        // Five baselines answered, one category still open.
        let mut breakdown = all_baseline_breakdown();
        breakdown.pop();
        let result = result_with(-100, breakdown);
        assert_eq!(result.verdict(), Verdict::AlreadyOptimized);
    }

    #[test]
    fn capture_prompt_requires_strictly_exceeding_threshold() {
        let threshold = Money::from_dollars(5_000);
        assert!(result_with(500, vec![]).should_prompt_capture(threshold)); // $6,000/yr
        assert!(!result_with(400, vec![]).should_prompt_capture(threshold)); // $4,800/yr

        let mut at_threshold = result_with(0, vec![]);
        at_threshold.annual_savings = threshold;
        assert!(!at_threshold.should_prompt_capture(threshold));
    }

    #[test]
    fn verdict_headlines_are_distinct() {
        let headlines = [
            Verdict::MonthlyWaste.headline(),
            Verdict::AlreadyOptimized.headline(),
            Verdict::ConsolidateTools.headline(),
        ];
        assert_ne!(headlines[0], headlines[1]);
        assert_ne!(headlines[1], headlines[2]);
    }
}
