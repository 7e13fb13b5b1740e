// ============================================================================
// Render Module
// Exact decimal string conversion of fractions
// ============================================================================
//
// Every renderer is built on the same two pieces:
// - LongDivision: digit-at-a-time expansion of |numerator| / denominator
// - resolve_rounding: the nine-mode decision table applied to the first
//   discarded digit, with carry back into the integer part
//
// Nothing here touches floating point, so rendering a value with hundreds
// of digits is exact.

mod fixed;
mod format;
mod long_division;
mod recurring;
mod rounding;

pub use format::FormatOptions;
pub use long_division::LongDivision;
pub use recurring::DecimalExpansion;
pub use rounding::{resolve_rounding, sticky_digit, RoundedDecimal, RoundingMode};
