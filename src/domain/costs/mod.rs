//! Cost Model - static (category, option) -> cost table.

mod entry;
mod model;

pub use entry::CostEntry;
pub use model::CostModel;
