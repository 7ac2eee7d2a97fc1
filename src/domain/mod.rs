//! Domain layer containing the estimation engine's business logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `costs` - Static cost model: (category, option) -> cost entry
//! - `pricing` - Subscription tiers and the team-size step function
//! - `estimate` - Pure aggregation of the survey into a comparison
//! - `messaging` - Reveal copy shown after each non-baseline answer
//! - `wizard` - The survey state machine

pub mod costs;
pub mod estimate;
pub mod foundation;
pub mod messaging;
pub mod pricing;
pub mod wizard;
