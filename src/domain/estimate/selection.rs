//! SelectionState - the survey's answers so far.
//!
//! The sole mutable object in the engine. Created empty at wizard start,
//! discarded on reset. Everything derived from it is recomputed, never
//! cached.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Category, PracticeOption, TeamSize};

/// Team size plus the per-category answers; an absent key means the
/// category has not been answered yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    team_size: TeamSize,
    answers: HashMap<Category, PracticeOption>,
}

impl SelectionState {
    /// Creates an empty selection for a team.
    pub fn new(team_size: TeamSize) -> Self {
        Self {
            team_size,
            answers: HashMap::new(),
        }
    }

    /// Returns the team size.
    pub fn team_size(&self) -> TeamSize {
        self.team_size
    }

    /// Replaces the team size (already clamped by `TeamSize`).
    pub fn set_team_size(&mut self, team_size: TeamSize) {
        self.team_size = team_size;
    }

    /// Records an answer, overwriting any prior answer for the option's
    /// category. Never moves the wizard's step pointer.
    pub fn set_answer(&mut self, option: PracticeOption) {
        self.answers.insert(option.category(), option);
    }

    /// Returns the answer for a category, if any.
    pub fn answer(&self, category: Category) -> Option<PracticeOption> {
        self.answers.get(&category).copied()
    }

    /// Returns true if the category has been answered.
    pub fn is_answered(&self, category: Category) -> bool {
        self.answers.contains_key(&category)
    }

    /// Returns how many categories have been answered.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Returns true once every category has an answer.
    pub fn is_complete(&self) -> bool {
        self.answers.len() == Category::COUNT
    }

    /// Returns true if every category is answered with its baseline
    /// software option.
    pub fn all_baseline(&self) -> bool {
        self.is_complete() && self.answers.values().all(|o| o.is_baseline())
    }

    /// Discards every answer, keeping the team size.
    pub fn clear_answers(&mut self) {
        self.answers.clear();
    }
}
