//! SavingsCalculator - the pure aggregation function.
//!
//! Stateless and referentially transparent: identical selections always
//! produce identical results, so callers may recompute on every
//! keystroke. Unanswered categories contribute zero to every subtotal,
//! which is what powers the live partial "current waste" preview.

use tracing::trace;

use crate::domain::costs::CostModel;
use crate::domain::foundation::{Category, DomainError, Money};
use crate::domain::pricing::PricingTable;

use super::{BreakdownLine, EstimateResult, SelectionState};

/// Pure service that folds the selection and the static tables into an
/// [`EstimateResult`].
pub struct SavingsCalculator;

impl SavingsCalculator {
    /// Computes the full comparison for the current selection.
    ///
    /// # Errors
    ///
    /// Only configuration defects surface here (an unmapped pair or a
    /// missing cost row). Partial selections are valid input.
    pub fn aggregate(
        selection: &SelectionState,
        pricing: &PricingTable,
    ) -> Result<EstimateResult, DomainError> {
        let team_size = selection.team_size();

        let mut total_direct = Money::ZERO;
        let mut total_hidden = Money::ZERO;
        let mut hours_monthly: u32 = 0;
        let mut breakdown = Vec::with_capacity(selection.answered_count());

        // Canonical order keeps the breakdown stable regardless of the
        // order answers arrived in.
        for category in Category::all() {
            let Some(option) = selection.answer(*category) else {
                continue;
            };
            let entry = CostModel::lookup(*category, option)?;

            let direct_cost = entry.direct_monthly_cost(team_size);
            let hidden_cost = entry.hidden_monthly_cost();
            let hours_wasted = entry.hours_per_month();

            total_direct += direct_cost;
            total_hidden += hidden_cost;
            hours_monthly += hours_wasted;

            breakdown.push(BreakdownLine {
                category: *category,
                option,
                label: option.label().to_string(),
                direct_cost,
                hidden_cost,
                hours_wasted,
            });
        }

        let total_current_spending = total_direct + total_hidden;
        let tier = pricing.tier_for(team_size);
        let tier_cost = pricing.tier_cost(team_size);
        let monthly_savings = total_current_spending - tier_cost;
        let annual_savings = monthly_savings * 12i64;

        // tier_cost is a positive constant for every supported team size,
        // so the ratio is always defined.
        let roi_percent =
            (monthly_savings.cents() as f64 / tier_cost.cents() as f64 * 100.0).round() as i32;

        let hours_recovered_annually = hours_monthly * 12;
        let value_of_time_recovered = pricing.hourly_rate * hours_recovered_annually;

        trace!(
            team_size = team_size.value(),
            answered = breakdown.len(),
            monthly_savings = %monthly_savings,
            "aggregated estimate"
        );

        Ok(EstimateResult {
            total_direct_cost: total_direct,
            total_hidden_cost: total_hidden,
            total_current_spending,
            tier,
            tier_cost,
            monthly_savings,
            annual_savings,
            roi_percent,
            hours_recovered_monthly: hours_monthly,
            hours_recovered_annually,
            value_of_time_recovered,
            breakdown,
        })
    }
}
