//! End-to-end scenarios for the savings estimator: the two canonical
//! sales scenarios, the full wizard flow, and algebraic properties of
//! the aggregation.

use proptest::prelude::*;

use tradeworks_roi::application::{RevealConfig, RevealFrame, SurveySession};
use tradeworks_roi::domain::costs::CostModel;
use tradeworks_roi::domain::estimate::{SavingsCalculator, SelectionState, Verdict};
use tradeworks_roi::domain::foundation::{Category, Money, PracticeOption, TeamSize};
use tradeworks_roi::domain::pricing::{PricingTable, Tier};

fn baseline_for(category: Category) -> PracticeOption {
    PracticeOption::options_for(category)
        .iter()
        .copied()
        .find(|o| o.is_baseline())
        .expect("every category has a baseline")
}

/// Scenario A: a 12-person crew running everything on the costliest
/// manual practice in every category.
#[test]
fn scenario_a_all_costliest_hidden_practices() {
    let mut selection = SelectionState::new(TeamSize::new(12));
    let mut expected_hidden = Money::ZERO;
    for category in Category::all() {
        let costliest = CostModel::costliest_hidden(*category).unwrap();
        let entry = CostModel::lookup(*category, costliest).unwrap();
        expected_hidden += entry.hidden_monthly_cost();
        selection.set_answer(costliest);
    }

    let pricing = PricingTable::default();
    let result = SavingsCalculator::aggregate(&selection, &pricing).unwrap();

    assert_eq!(result.total_direct_cost, Money::ZERO);
    assert_eq!(result.total_current_spending, expected_hidden);
    assert_eq!(result.total_current_spending, Money::from_dollars(2_950));
    assert_eq!(result.tier, Tier::Company);
    assert_eq!(result.tier_cost, Money::from_dollars(399));
    assert!(result.monthly_savings.is_positive());
    assert_eq!(result.monthly_savings, Money::from_dollars(2_551));
    assert_eq!(result.annual_savings, Money::from_dollars(30_612));
    assert_eq!(result.roi_percent, 639);
    assert_eq!(result.hours_recovered_monthly, 68);
    assert_eq!(result.hours_recovered_annually, 816);
    assert_eq!(result.value_of_time_recovered, Money::from_dollars(816 * 35));
    assert_eq!(result.verdict(), Verdict::MonthlyWaste);
    assert!(result.should_prompt_capture(pricing.capture_threshold_annual));
}

/// Scenario B: a 5-person crew already paying for dedicated software in
/// every category.
#[test]
fn scenario_b_all_baseline_software() {
    let mut selection = SelectionState::new(TeamSize::new(5));
    for category in Category::all() {
        selection.set_answer(baseline_for(*category));
    }

    let pricing = PricingTable::default();
    let result = SavingsCalculator::aggregate(&selection, &pricing).unwrap();

    assert_eq!(result.total_hidden_cost, Money::ZERO);
    assert_eq!(result.hours_recovered_monthly, 0);

    let expected_direct: Money = Category::all()
        .iter()
        .map(|c| {
            CostModel::lookup(*c, baseline_for(*c))
                .unwrap()
                .direct_monthly_cost(TeamSize::new(5))
        })
        .sum();
    assert_eq!(result.total_direct_cost, expected_direct);
    assert_eq!(result.total_direct_cost, Money::from_dollars(230));

    assert_eq!(result.tier, Tier::Crew);
    assert!(result.monthly_savings <= Money::ZERO);
    assert_eq!(result.monthly_savings, Money::from_dollars(-19));
    assert_eq!(result.verdict(), Verdict::ConsolidateTools);
    assert!(!result.should_prompt_capture(pricing.capture_threshold_annual));
}

#[test]
fn tier_boundary_resolves_upward() {
    let pricing = PricingTable::default();
    assert_eq!(pricing.tier_cost(TeamSize::new(7)), Money::from_dollars(249));
    assert_eq!(pricing.tier_cost(TeamSize::new(8)), Money::from_dollars(399));
}

#[tokio::test]
async fn full_survey_flow_through_the_session() {
    let mut session = SurveySession::new(
        TeamSize::new(12),
        PricingTable::default(),
        RevealConfig::default()
            .with_duration(std::time::Duration::from_millis(40))
            .with_tick_count(4),
    );

    // Step 1 always advances.
    assert!(session.next().unwrap());

    for category in Category::all() {
        // Gated until this category is answered.
        assert!(!session.next().unwrap());
        let copy = session
            .answer(CostModel::costliest_hidden(*category).unwrap())
            .unwrap();
        assert!(copy.is_some(), "manual practices carry reveal copy");
        assert!(session.next().unwrap());
    }
    assert!(session.step().is_results());

    // The animation lands on exactly the aggregate's numbers.
    let frame = session.settled_frame().await.expect("cancelled");
    let result = session.estimate().unwrap();
    assert_eq!(frame, RevealFrame::settled(&result));
    assert!(session.should_prompt_capture().unwrap());

    // Back out and re-enter: restart from zero, same final values.
    assert!(session.back());
    assert!(session.next().unwrap());
    assert_eq!(session.reveal_frame().unwrap(), RevealFrame::zero());
    let again = session.settled_frame().await.expect("cancelled");
    assert_eq!(again, frame);
}

fn selection_strategy() -> impl Strategy<Value = SelectionState> {
    (
        1u32..=100,
        proptest::collection::vec(proptest::option::of(0usize..4), Category::COUNT),
    )
        .prop_map(|(team, picks)| {
            let mut selection = SelectionState::new(TeamSize::new(team));
            for (category, pick) in Category::all().iter().zip(picks) {
                if let Some(i) = pick {
                    selection.set_answer(PracticeOption::options_for(*category)[i]);
                }
            }
            selection
        })
}

proptest! {
    #[test]
    fn aggregate_is_referentially_transparent(selection in selection_strategy()) {
        let pricing = PricingTable::default();
        let first = SavingsCalculator::aggregate(&selection, &pricing).unwrap();
        let second = SavingsCalculator::aggregate(&selection, &pricing).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn savings_identities_hold(selection in selection_strategy()) {
        let pricing = PricingTable::default();
        let result = SavingsCalculator::aggregate(&selection, &pricing).unwrap();

        prop_assert_eq!(
            result.total_current_spending,
            result.total_direct_cost + result.total_hidden_cost
        );
        prop_assert_eq!(
            result.monthly_savings,
            result.total_current_spending - result.tier_cost
        );
        prop_assert_eq!(result.annual_savings, result.monthly_savings * 12i64);
        prop_assert_eq!(
            result.hours_recovered_annually,
            result.hours_recovered_monthly * 12
        );
    }

    #[test]
    fn hours_come_only_from_hidden_answers(selection in selection_strategy()) {
        let pricing = PricingTable::default();
        let result = SavingsCalculator::aggregate(&selection, &pricing).unwrap();

        let expected: u32 = Category::all()
            .iter()
            .filter_map(|c| selection.answer(*c))
            .map(|o| {
                CostModel::lookup(o.category(), o)
                    .unwrap()
                    .hours_per_month()
            })
            .sum();
        prop_assert_eq!(result.hours_recovered_monthly, expected);

        for line in &result.breakdown {
            if line.is_baseline() {
                prop_assert_eq!(line.hours_wasted, 0);
            }
        }
    }

    #[test]
    fn breakdown_lines_have_exactly_one_cost(selection in selection_strategy()) {
        let pricing = PricingTable::default();
        let result = SavingsCalculator::aggregate(&selection, &pricing).unwrap();

        prop_assert_eq!(result.breakdown.len(), selection.answered_count());
        for line in &result.breakdown {
            prop_assert!(line.direct_cost.is_zero() ^ line.hidden_cost.is_zero());
        }
    }

    #[test]
    fn tier_step_function_over_the_full_range(team in 1u32..=100) {
        let pricing = PricingTable::default();
        let cost = pricing.tier_cost(TeamSize::new(team));
        if team < 8 {
            prop_assert_eq!(cost, Money::from_dollars(249));
        } else {
            prop_assert_eq!(cost, Money::from_dollars(399));
        }
    }
}
