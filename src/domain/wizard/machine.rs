//! Wizard aggregate - the survey state machine.
//!
//! Navigation is driven by an explicit transition table over
//! (state, event), guarded by answer completeness. Rejected events leave
//! the state untouched; they are flow control, not errors.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::estimate::SelectionState;
use crate::domain::foundation::{Category, Percentage, PracticeOption, TeamSize};

use super::WizardStep;

/// Navigation events the wizard responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardEvent {
    Next,
    Back,
}

/// Outcome of applying an event to a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Move to the given step.
    To(WizardStep),
    /// Event not allowed here; state unchanged.
    Rejected,
}

/// The transition table: state x event -> next state | rejected.
///
/// The guard on `Next` from a question step is the only place answer
/// completeness affects navigation. No skipping, no non-adjacent jumps.
pub fn transition(
    state: WizardStep,
    event: WizardEvent,
    selection: &SelectionState,
) -> Transition {
    use WizardEvent::{Back, Next};
    use WizardStep::{Question, Results, TeamSize};

    match (state, event) {
        // Any in-bounds team size is a valid answer to step 1.
        (TeamSize, Next) => Transition::To(Question { category: Category::first() }),
        (TeamSize, Back) => Transition::Rejected,

        (Question { category }, Next) if !selection.is_answered(category) => {
            Transition::Rejected
        }
        (Question { category }, Next) => match category.next() {
            Some(next) => Transition::To(Question { category: next }),
            None => Transition::To(Results),
        },
        (Question { category }, Back) => match category.previous() {
            Some(prev) => Transition::To(Question { category: prev }),
            None => Transition::To(TeamSize),
        },

        (Results, Next) => Transition::Rejected,
        (Results, Back) => Transition::To(Question { category: Category::last() }),
    }
}

/// The survey wizard: current step plus the selection it is filling in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wizard {
    step: WizardStep,
    selection: SelectionState,
}

impl Wizard {
    /// Starts a fresh survey for a team.
    pub fn new(team_size: TeamSize) -> Self {
        Self {
            step: WizardStep::first(),
            selection: SelectionState::new(team_size),
        }
    }

    /// Returns the current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Returns the selection being filled in.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Returns survey progress for the progress bar.
    pub fn progress(&self) -> Percentage {
        self.step.progress()
    }

    /// Applies a navigation event via the transition table. Returns true
    /// if the step changed.
    pub fn apply(&mut self, event: WizardEvent) -> bool {
        match transition(self.step, event, &self.selection) {
            Transition::To(next) => {
                debug!(from = %self.step, to = %next, ?event, "wizard transition");
                self.step = next;
                true
            }
            Transition::Rejected => {
                debug!(at = %self.step, ?event, "wizard event rejected");
                false
            }
        }
    }

    /// Advances to the next step if the current step allows it.
    pub fn next(&mut self) -> bool {
        self.apply(WizardEvent::Next)
    }

    /// Steps back, preserving every answer.
    pub fn back(&mut self) -> bool {
        self.apply(WizardEvent::Back)
    }

    /// Records an answer. Always succeeds; never moves the step pointer.
    pub fn set_answer(&mut self, option: PracticeOption) {
        self.selection.set_answer(option);
    }

    /// Updates the team size (clamped by `TeamSize`).
    pub fn set_team_size(&mut self, team_size: TeamSize) {
        self.selection.set_team_size(team_size);
    }

    /// Discards all answers and returns to step 1.
    pub fn reset(&mut self) {
        debug!("wizard reset");
        self.selection.clear_answers();
        self.step = WizardStep::first();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> Wizard {
        Wizard::new(TeamSize::new(10))
    }

    fn answered_wizard() -> Wizard {
        let mut w = wizard();
        for category in Category::all() {
            w.set_answer(PracticeOption::options_for(*category)[0]);
        }
        w
    }

    #[test]
    fn starts_on_team_size_step() {
        assert_eq!(wizard().step(), WizardStep::TeamSize);
    }

    #[test]
    fn next_from_team_size_always_advances() {
        // Even the clamped minimum team size is a valid answer.
        let mut w = Wizard::new(TeamSize::new(0));
        assert!(w.next());
        assert_eq!(
            w.step(),
            WizardStep::Question { category: Category::TimeTracking }
        );
    }

    #[test]
    fn next_without_answer_is_a_no_op() {
        let mut w = wizard();
        w.next();
        let before = w.step();
        assert!(!w.next());
        assert_eq!(w.step(), before);
    }

    #[test]
    fn next_with_answer_advances_through_all_questions() {
        let mut w = answered_wizard();
        assert!(w.next()); // -> first question
        for _ in 0..Category::COUNT {
            assert!(w.next());
        }
        assert_eq!(w.step(), WizardStep::Results);
    }

    #[test]
    fn last_question_goes_to_results_not_step_eight() {
        let mut w = answered_wizard();
        w.next();
        for _ in 0..Category::COUNT - 1 {
            w.next();
        }
        assert_eq!(
            w.step(),
            WizardStep::Question { category: Category::last() }
        );
        assert!(w.next());
        assert_eq!(w.step(), WizardStep::Results);
        // No further forward state exists.
        assert!(!w.next());
        assert_eq!(w.step(), WizardStep::Results);
    }

    #[test]
    fn back_from_step_one_is_a_no_op() {
        let mut w = wizard();
        assert!(!w.back());
        assert_eq!(w.step(), WizardStep::TeamSize);
    }

    #[test]
    fn back_preserves_answers() {
        let mut w = wizard();
        w.next();
        w.set_answer(PracticeOption::PaperTimesheets);
        w.next();
        assert!(w.back());
        assert_eq!(
            w.selection().answer(Category::TimeTracking),
            Some(PracticeOption::PaperTimesheets)
        );
    }

    #[test]
    fn back_from_results_returns_to_last_question_intact() {
        let mut w = answered_wizard();
        w.next();
        for _ in 0..Category::COUNT {
            w.next();
        }
        assert_eq!(w.step(), WizardStep::Results);

        assert!(w.back());
        assert_eq!(
            w.step(),
            WizardStep::Question { category: Category::DocumentStorage }
        );
        assert!(w.selection().is_answered(Category::DocumentStorage));
    }

    #[test]
    fn set_answer_does_not_move_the_step_pointer() {
        let mut w = wizard();
        w.next();
        let before = w.step();
        w.set_answer(PracticeOption::CallsAndTexts);
        w.set_answer(PracticeOption::SpreadsheetTimesheets);
        assert_eq!(w.step(), before);
    }

    #[test]
    fn transitions_are_only_between_adjacent_steps() {
        let mut w = answered_wizard();
        let mut numbers = vec![w.step().step_number().unwrap()];
        while w.next() {
            if let Some(n) = w.step().step_number() {
                numbers.push(n);
            }
        }
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn progress_tracks_step_position() {
        let mut w = answered_wizard();
        assert_eq!(w.progress().value(), 14); // 1/7
        w.next();
        assert_eq!(w.progress().value(), 28); // 2/7
        for _ in 0..Category::COUNT {
            w.next();
        }
        assert_eq!(w.progress(), Percentage::HUNDRED);
    }

    #[test]
    fn reset_discards_answers_and_returns_to_start() {
        let mut w = answered_wizard();
        w.next();
        w.reset();
        assert_eq!(w.step(), WizardStep::TeamSize);
        assert_eq!(w.selection().answered_count(), 0);
    }

    #[test]
    fn transition_table_rejects_forward_from_results() {
        let selection = SelectionState::new(TeamSize::new(5));
        assert_eq!(
            transition(WizardStep::Results, WizardEvent::Next, &selection),
            Transition::Rejected
        );
    }
}
