//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types that form the
//! vocabulary of the ROI estimation domain.

mod category;
mod errors;
mod money;
mod percentage;
mod practice;
mod team_size;

pub use category::Category;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use money::Money;
pub use percentage::Percentage;
pub use practice::PracticeOption;
pub use team_size::TeamSize;
