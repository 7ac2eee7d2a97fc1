//! CostModel - the static table behind the whole comparison.
//!
//! Hand-authored estimates, not measured data. The table must be total
//! over every valid (category, option) pair; a gap is a configuration
//! defect and `lookup` fails fast rather than defaulting to zero, since
//! a silent zero would understate the estimate.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::foundation::{Category, DomainError, ErrorCode, Money, PracticeOption};

use super::CostEntry;

const fn direct(per_seat: i64, base: i64) -> CostEntry {
    CostEntry::Direct {
        per_seat: Money::from_dollars(per_seat),
        base: Money::from_dollars(base),
    }
}

const fn hidden(monthly: i64, hours_per_month: u32) -> CostEntry {
    CostEntry::Hidden {
        monthly: Money::from_dollars(monthly),
        hours_per_month,
    }
}

/// One row per survey option. Baseline rows are `direct`; every manual
/// practice is `hidden` (estimated leak + hours per month).
const COST_ROWS: &[(PracticeOption, CostEntry)] = &[
    // Time tracking
    (PracticeOption::PaperTimesheets, hidden(450, 12)),
    (PracticeOption::SpreadsheetTimesheets, hidden(300, 8)),
    (PracticeOption::TextMessageClockIns, hidden(520, 14)),
    (PracticeOption::TimeTrackingSoftware, direct(5, 0)),
    // Project coordination
    (PracticeOption::CallsAndTexts, hidden(600, 16)),
    (PracticeOption::GroupChatThreads, hidden(380, 10)),
    (PracticeOption::JobSiteWhiteboard, hidden(280, 7)),
    (PracticeOption::ProjectSoftware, direct(9, 0)),
    // Client relationships
    (PracticeOption::PaperClientFiles, hidden(350, 9)),
    (PracticeOption::SpreadsheetContactList, hidden(250, 6)),
    (PracticeOption::EmailInboxSearch, hidden(420, 11)),
    (PracticeOption::CrmSoftware, direct(7, 20)),
    // Safety & compliance
    (PracticeOption::PaperSafetyForms, hidden(400, 10)),
    (PracticeOption::SharedDriveTemplates, hidden(260, 6)),
    (PracticeOption::NoFormalProgram, hidden(550, 5)),
    (PracticeOption::SafetySoftware, direct(4, 15)),
    // Scheduling
    (PracticeOption::WhiteboardCalendar, hidden(320, 8)),
    (PracticeOption::SchedulingByPhone, hidden(480, 13)),
    (PracticeOption::SharedCalendarSpreadsheet, hidden(300, 7)),
    (PracticeOption::SchedulingSoftware, direct(6, 0)),
    // Document storage
    (PracticeOption::FilingCabinets, hidden(380, 9)),
    (PracticeOption::PersonalDrives, hidden(240, 5)),
    (PracticeOption::EmailAttachments, hidden(310, 8)),
    (PracticeOption::DocumentSoftware, direct(4, 20)),
];

static COST_TABLE: Lazy<HashMap<PracticeOption, CostEntry>> =
    Lazy::new(|| COST_ROWS.iter().copied().collect());

/// Lookup into the static cost table.
pub struct CostModel;

impl CostModel {
    /// Returns the cost entry for a (category, option) pair.
    ///
    /// # Errors
    ///
    /// - `UnmappedPractice` if the option does not belong to the category
    /// - `MissingCostEntry` if the table has no row for the option
    ///
    /// Both are configuration defects, never valid survey input.
    pub fn lookup(
        category: Category,
        option: PracticeOption,
    ) -> Result<CostEntry, DomainError> {
        if !option.belongs_to(category) {
            return Err(DomainError::new(
                ErrorCode::UnmappedPractice,
                format!("'{}' is not an option for {}", option.label(), category),
            )
            .with_detail("category", category.display_name())
            .with_detail("option", option.label()));
        }

        COST_TABLE.get(&option).copied().ok_or_else(|| {
            DomainError::new(
                ErrorCode::MissingCostEntry,
                format!("No cost row for '{}'", option.label()),
            )
            .with_detail("option", option.label())
        })
    }

    /// Returns the costliest hidden option for a category (by monthly
    /// dollar leak). Used by demos and tests; every category has at
    /// least three hidden options.
    pub fn costliest_hidden(category: Category) -> Result<PracticeOption, DomainError> {
        PracticeOption::options_for(category)
            .iter()
            .filter(|o| !o.is_baseline())
            .map(|o| Self::lookup(category, *o).map(|e| (*o, e.hidden_monthly_cost())))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .max_by_key(|(_, monthly)| *monthly)
            .map(|(o, _)| o)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::MissingCostEntry,
                    format!("{} has no hidden options", category),
                )
            })
    }
}
