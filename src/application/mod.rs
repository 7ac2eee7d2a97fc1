//! Application layer - services coordinating the domain engine.
//!
//! - `reveal` - the cancellable results animation task
//! - `survey` - one prospect's session: wizard + estimate + reveal

pub mod reveal;
pub mod survey;

pub use reveal::{ease_out_cubic, interpolate, RevealAnimation, RevealConfig, RevealFrame};
pub use survey::SurveySession;
