//! Estimate Module - Pure aggregation of the survey into a comparison.
//!
//! # Components
//!
//! - `SelectionState` - team size plus per-category answers (the one
//!   mutable object in the engine)
//! - `BreakdownLine` / `EstimateResult` / `Verdict` - the computed
//!   comparison and its presentation branch
//! - `SavingsCalculator` - the pure aggregation function
//!
//! All functions here are pure; no I/O, no clocks, no caching.

mod calculator;
mod result;
mod selection;

pub use calculator::SavingsCalculator;
pub use result::{BreakdownLine, EstimateResult, Verdict};
pub use selection::SelectionState;
