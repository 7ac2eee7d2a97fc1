//! WizardStep - the discrete states of the survey.
//!
//! Step 1 asks for team size; steps 2-7 ask one category each in
//! canonical order; `Results` is the comparison view. There is no step 8.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Category, Percentage};

/// Total number of question steps (team size + six categories).
pub const TOTAL_STEPS: usize = 1 + Category::COUNT;

/// A discrete wizard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum WizardStep {
    /// Step 1: how big is the team?
    TeamSize,
    /// Steps 2-7: one survey category each.
    Question { category: Category },
    /// The comparison view.
    Results,
}

impl WizardStep {
    /// The step the wizard starts on.
    pub fn first() -> Self {
        WizardStep::TeamSize
    }

    /// Returns the 1-based step number, or `None` for the results view.
    pub fn step_number(&self) -> Option<usize> {
        match self {
            WizardStep::TeamSize => Some(1),
            WizardStep::Question { category } => Some(2 + category.order_index()),
            WizardStep::Results => None,
        }
    }

    /// Returns the category asked on this step, if it is a question step.
    pub fn category(&self) -> Option<Category> {
        match self {
            WizardStep::Question { category } => Some(*category),
            _ => None,
        }
    }

    /// Survey progress: step/7 while in step states, 100% on results.
    pub fn progress(&self) -> Percentage {
        match self.step_number() {
            Some(n) => Percentage::from_ratio(n, TOTAL_STEPS),
            None => Percentage::HUNDRED,
        }
    }

    /// Returns true for the results view.
    pub fn is_results(&self) -> bool {
        matches!(self, WizardStep::Results)
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStep::TeamSize => write!(f, "Step 1: Team Size"),
            WizardStep::Question { category } => write!(
                f,
                "Step {}: {}",
                self.step_number().unwrap_or(0),
                category
            ),
            WizardStep::Results => write!(f, "Results"),
        }
    }
}
