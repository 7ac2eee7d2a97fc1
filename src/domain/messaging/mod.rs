//! Reveal/Messaging Lookup - per-answer explanatory copy.
//!
//! Shown immediately after a non-baseline answer is chosen, before the
//! next step. Baseline answers get no message. The copy table shares its
//! domain with the cost model: a non-baseline option without copy is a
//! configuration defect and fails fast.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::foundation::{Category, DomainError, ErrorCode, PracticeOption};

/// One copy row per non-baseline option.
const REVEAL_ROWS: &[(PracticeOption, &str)] = &[
    (
        PracticeOption::PaperTimesheets,
        "Paper timesheets get rounded, lost, and re-typed. Crews like yours \
         typically leak about $450 a month to payroll padding and re-entry.",
    ),
    (
        PracticeOption::SpreadsheetTimesheets,
        "Spreadsheets beat paper, but someone still chases every crew lead \
         for numbers. That back-and-forth runs about 8 office hours a month.",
    ),
    (
        PracticeOption::TextMessageClockIns,
        "Texted clock-ins vanish into message threads. Reconstructing hours \
         at payroll time burns around 14 hours a month and invites disputes.",
    ),
    (
        PracticeOption::CallsAndTexts,
        "Running jobs by phone means every change gets relayed one call at a \
         time. Missed handoffs cost crews around $600 a month in idle time.",
    ),
    (
        PracticeOption::GroupChatThreads,
        "Group chats bury decisions under small talk. Scrolling for the real \
         plan wastes about 10 hours a month across a crew.",
    ),
    (
        PracticeOption::JobSiteWhiteboard,
        "A whiteboard can't follow anyone home. Out-of-date boards cause \
         repeat trips and double-booked crews worth about $280 a month.",
    ),
    (
        PracticeOption::PaperClientFiles,
        "Paper client files mean job history lives in a cabinet only one \
         person understands. Lookups and re-quotes eat about 9 hours a month.",
    ),
    (
        PracticeOption::SpreadsheetContactList,
        "A contact spreadsheet goes stale the week it's made. Stale numbers \
         and missed follow-ups cost roughly $250 a month in lost repeat work.",
    ),
    (
        PracticeOption::EmailInboxSearch,
        "If the inbox is the CRM, every quote starts with a search. That \
         digging costs about 11 hours a month, and deals slip through.",
    ),
    (
        PracticeOption::PaperSafetyForms,
        "Paper safety forms pile up unsigned and unfindable. Chasing \
         signatures before an audit eats about 10 hours a month.",
    ),
    (
        PracticeOption::SharedDriveTemplates,
        "Drive templates still depend on someone printing, scanning, and \
         filing. Incomplete records cost about $260 a month in rework.",
    ),
    (
        PracticeOption::NoFormalProgram,
        "No formal safety program is the costliest answer on this page: one \
         incident without documentation can dwarf the $550 monthly exposure.",
    ),
    (
        PracticeOption::WhiteboardCalendar,
        "A whiteboard schedule means the office is the only source of truth. \
         Crews calling in for tomorrow's plan burn about 8 hours a month.",
    ),
    (
        PracticeOption::SchedulingByPhone,
        "Scheduling by phone makes every change a round of calls. Reshuffles \
         and no-shows cost about $480 a month in dead time.",
    ),
    (
        PracticeOption::SharedCalendarSpreadsheet,
        "A shared spreadsheet schedule breaks the moment two people edit it. \
         Conflicts and stale copies waste about 7 hours a month.",
    ),
    (
        PracticeOption::FilingCabinets,
        "Filing cabinets mean permits and contracts live in one office. \
         Driving back for paperwork costs about $380 a month.",
    ),
    (
        PracticeOption::PersonalDrives,
        "When documents live on personal drives, they leave when people do. \
         Hunting for the latest version wastes about 5 hours a month.",
    ),
    (
        PracticeOption::EmailAttachments,
        "Email attachments mean nobody knows which contract is current. \
         Version confusion costs about 8 hours a month and the odd redo.",
    ),
];

static REVEAL_TABLE: Lazy<HashMap<PracticeOption, &'static str>> =
    Lazy::new(|| REVEAL_ROWS.iter().copied().collect());

/// Returns the reveal copy for a (category, option) pair.
///
/// `Ok(None)` for every baseline option (no message needed).
///
/// # Errors
///
/// - `UnmappedPractice` if the option does not belong to the category
/// - `MissingRevealMessage` if a non-baseline option has no copy row
pub fn reveal_message(
    category: Category,
    option: PracticeOption,
) -> Result<Option<&'static str>, DomainError> {
    if !option.belongs_to(category) {
        return Err(DomainError::new(
            ErrorCode::UnmappedPractice,
            format!("'{}' is not an option for {}", option.label(), category),
        )
        .with_detail("category", category.display_name())
        .with_detail("option", option.label()));
    }

    if option.is_baseline() {
        return Ok(None);
    }

    REVEAL_TABLE.get(&option).copied().map(Some).ok_or_else(|| {
        DomainError::new(
            ErrorCode::MissingRevealMessage,
            format!("No reveal copy for '{}'", option.label()),
        )
        .with_detail("option", option.label())
    })
}
