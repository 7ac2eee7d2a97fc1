//! PracticeOption enum - the closed set of survey answers.
//!
//! One flat sum type covers every option across all six categories (four
//! per category). Each category has exactly one baseline option: the
//! dedicated paid software the prospect may already be running. Every
//! other option is a manual or ad hoc practice carrying hidden cost.
//!
//! Keeping the options in a single enum lets the cost table, breakdown
//! assembly, and reveal copy each be one table-indexed lookup instead of
//! a switch arm per category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Category;

/// A survey answer: how the prospect handles one category today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeOption {
    // Time tracking
    PaperTimesheets,
    SpreadsheetTimesheets,
    TextMessageClockIns,
    TimeTrackingSoftware,

    // Project coordination
    CallsAndTexts,
    GroupChatThreads,
    JobSiteWhiteboard,
    ProjectSoftware,

    // Client relationships
    PaperClientFiles,
    SpreadsheetContactList,
    EmailInboxSearch,
    CrmSoftware,

    // Safety & compliance
    PaperSafetyForms,
    SharedDriveTemplates,
    NoFormalProgram,
    SafetySoftware,

    // Scheduling
    WhiteboardCalendar,
    SchedulingByPhone,
    SharedCalendarSpreadsheet,
    SchedulingSoftware,

    // Document storage
    FilingCabinets,
    PersonalDrives,
    EmailAttachments,
    DocumentSoftware,
}

impl PracticeOption {
    /// Returns the closed option set for a category, baseline last.
    pub fn options_for(category: Category) -> &'static [PracticeOption; 4] {
        use PracticeOption::*;
        match category {
            Category::TimeTracking => &[
                PaperTimesheets,
                SpreadsheetTimesheets,
                TextMessageClockIns,
                TimeTrackingSoftware,
            ],
            Category::ProjectCoordination => &[
                CallsAndTexts,
                GroupChatThreads,
                JobSiteWhiteboard,
                ProjectSoftware,
            ],
            Category::ClientRelations => &[
                PaperClientFiles,
                SpreadsheetContactList,
                EmailInboxSearch,
                CrmSoftware,
            ],
            Category::SafetyCompliance => &[
                PaperSafetyForms,
                SharedDriveTemplates,
                NoFormalProgram,
                SafetySoftware,
            ],
            Category::Scheduling => &[
                WhiteboardCalendar,
                SchedulingByPhone,
                SharedCalendarSpreadsheet,
                SchedulingSoftware,
            ],
            Category::DocumentStorage => &[
                FilingCabinets,
                PersonalDrives,
                EmailAttachments,
                DocumentSoftware,
            ],
        }
    }

    /// Returns the category this option answers.
    pub fn category(&self) -> Category {
        use PracticeOption::*;
        match self {
            PaperTimesheets | SpreadsheetTimesheets | TextMessageClockIns
            | TimeTrackingSoftware => Category::TimeTracking,
            CallsAndTexts | GroupChatThreads | JobSiteWhiteboard | ProjectSoftware => {
                Category::ProjectCoordination
            }
            PaperClientFiles | SpreadsheetContactList | EmailInboxSearch | CrmSoftware => {
                Category::ClientRelations
            }
            PaperSafetyForms | SharedDriveTemplates | NoFormalProgram | SafetySoftware => {
                Category::SafetyCompliance
            }
            WhiteboardCalendar | SchedulingByPhone | SharedCalendarSpreadsheet
            | SchedulingSoftware => Category::Scheduling,
            FilingCabinets | PersonalDrives | EmailAttachments | DocumentSoftware => {
                Category::DocumentStorage
            }
        }
    }

    /// Returns true for the one dedicated-software (baseline) option of
    /// each category.
    pub fn is_baseline(&self) -> bool {
        use PracticeOption::*;
        matches!(
            self,
            TimeTrackingSoftware
                | ProjectSoftware
                | CrmSoftware
                | SafetySoftware
                | SchedulingSoftware
                | DocumentSoftware
        )
    }

    /// Returns true if this option belongs to the given category's set.
    pub fn belongs_to(&self, category: Category) -> bool {
        self.category() == category
    }

    /// Returns the answer label shown on the survey step.
    pub fn label(&self) -> &'static str {
        use PracticeOption::*;
        match self {
            PaperTimesheets => "Paper timesheets",
            SpreadsheetTimesheets => "Spreadsheet timesheets",
            TextMessageClockIns => "Texted clock-ins",
            TimeTrackingSoftware => "Time tracking software",
            CallsAndTexts => "Calls and texts",
            GroupChatThreads => "Group chat threads",
            JobSiteWhiteboard => "Job-site whiteboard",
            ProjectSoftware => "Project management software",
            PaperClientFiles => "Paper client files",
            SpreadsheetContactList => "Spreadsheet contact list",
            EmailInboxSearch => "Digging through email",
            CrmSoftware => "CRM software",
            PaperSafetyForms => "Paper safety forms",
            SharedDriveTemplates => "Shared-drive templates",
            NoFormalProgram => "No formal program",
            SafetySoftware => "Safety software",
            WhiteboardCalendar => "Whiteboard calendar",
            SchedulingByPhone => "Scheduling by phone",
            SharedCalendarSpreadsheet => "Shared calendar spreadsheet",
            SchedulingSoftware => "Scheduling software",
            FilingCabinets => "Filing cabinets",
            PersonalDrives => "Personal drives",
            EmailAttachments => "Email attachments",
            DocumentSoftware => "Document storage software",
        }
    }
}

impl fmt::Display for PracticeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_four_options() {
        for category in Category::all() {
            assert_eq!(PracticeOption::options_for(*category).len(), 4);
        }
    }

    #[test]
    fn every_category_has_exactly_one_baseline() {
        for category in Category::all() {
            let baselines = PracticeOption::options_for(*category)
                .iter()
                .filter(|o| o.is_baseline())
                .count();
            assert_eq!(baselines, 1, "{} must have one baseline", category);
        }
    }

    #[test]
    fn option_sets_are_disjoint() {
        let mut seen = std::collections::HashSet::new();
        for category in Category::all() {
            for option in PracticeOption::options_for(*category) {
                assert!(seen.insert(*option), "{:?} appears twice", option);
            }
        }
        assert_eq!(seen.len(), Category::COUNT * 4);
    }

    #[test]
    fn category_is_inverse_of_options_for() {
        for category in Category::all() {
            for option in PracticeOption::options_for(*category) {
                assert_eq!(option.category(), *category);
                assert!(option.belongs_to(*category));
            }
        }
    }

    #[test]
    fn belongs_to_rejects_foreign_pairs() {
        assert!(!PracticeOption::FilingCabinets.belongs_to(Category::TimeTracking));
        assert!(!PracticeOption::PaperTimesheets.belongs_to(Category::Scheduling));
    }

    #[test]
    fn every_option_has_a_label() {
        for category in Category::all() {
            for option in PracticeOption::options_for(*category) {
                assert!(!option.label().is_empty());
            }
        }
    }

    #[test]
    fn serializes_to_snake_case_json() {
        let json = serde_json::to_string(&PracticeOption::TextMessageClockIns).unwrap();
        assert_eq!(json, "\"text_message_clock_ins\"");

        let o: PracticeOption = serde_json::from_str("\"crm_software\"").unwrap();
        assert_eq!(o, PracticeOption::CrmSoftware);
    }
}
