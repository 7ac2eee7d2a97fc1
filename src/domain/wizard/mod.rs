//! Wizard State Machine - sequencing and gating of the survey steps.

mod machine;
mod step;

pub use machine::{transition, Transition, Wizard, WizardEvent};
pub use step::{WizardStep, TOTAL_STEPS};
