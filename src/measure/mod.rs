// ============================================================================
// Measure Module
// Fractions tagged with a unit (assets, percentages) by composition
// ============================================================================

#[allow(clippy::module_inception)]
mod measure;
mod unit;

pub use measure::{Amount, Measure, Percentage};
pub use unit::{Asset, Percent, Unit};
