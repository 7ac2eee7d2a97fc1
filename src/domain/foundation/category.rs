//! Category enum representing the 6 survey areas.
//!
//! The survey walks these in a fixed canonical order (steps 2-7 of the
//! wizard). All ordering queries go through this type so the step
//! sequence lives in exactly one place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The 6 tooling areas the survey asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TimeTracking,
    ProjectCoordination,
    ClientRelations,
    SafetyCompliance,
    Scheduling,
    DocumentStorage,
}

impl Category {
    /// Number of survey categories.
    pub const COUNT: usize = 6;

    /// The canonical survey order.
    pub const ORDER: [Category; Self::COUNT] = [
        Category::TimeTracking,
        Category::ProjectCoordination,
        Category::ClientRelations,
        Category::SafetyCompliance,
        Category::Scheduling,
        Category::DocumentStorage,
    ];

    /// Returns all categories in canonical order.
    pub fn all() -> &'static [Category; Self::COUNT] {
        &Self::ORDER
    }

    /// Returns the 0-based index of this category in the canonical order.
    pub fn order_index(&self) -> usize {
        Self::ORDER
            .iter()
            .position(|c| c == self)
            .expect("All Category variants must be in ORDER")
    }

    /// Returns the next category in survey order, if any.
    pub fn next(&self) -> Option<Category> {
        Self::ORDER.get(self.order_index() + 1).copied()
    }

    /// Returns the previous category in survey order, if any.
    pub fn previous(&self) -> Option<Category> {
        let idx = self.order_index();
        if idx == 0 {
            None
        } else {
            Self::ORDER.get(idx - 1).copied()
        }
    }

    /// Returns the first category asked.
    pub fn first() -> Category {
        Self::ORDER[0]
    }

    /// Returns the last category asked.
    pub fn last() -> Category {
        Self::ORDER[Self::COUNT - 1]
    }

    /// Returns the display name shown as the step heading.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::TimeTracking => "Time Tracking",
            Category::ProjectCoordination => "Project Coordination",
            Category::ClientRelations => "Client Relationships",
            Category::SafetyCompliance => "Safety & Compliance",
            Category::Scheduling => "Scheduling",
            Category::DocumentStorage => "Document Storage",
        }
    }

    /// Returns the survey question asked for this category.
    pub fn question(&self) -> &'static str {
        match self {
            Category::TimeTracking => "How does your crew track hours today?",
            Category::ProjectCoordination => "How do you keep jobs coordinated day to day?",
            Category::ClientRelations => "Where do your client details and job history live?",
            Category::SafetyCompliance => "How do you handle safety forms and toolbox talks?",
            Category::Scheduling => "How do you build and share the weekly schedule?",
            Category::DocumentStorage => "Where do contracts, photos, and permits end up?",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
