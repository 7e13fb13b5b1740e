// ============================================================================
// BigFraction Library
// Exact rational arithmetic with decimal rendering in nine rounding modes
// ============================================================================

//! # BigFraction
//!
//! Exact rational numbers over arbitrary-precision integers, for financial
//! and token-amount computations where binary floating point is not an
//! option.
//!
//! ## Features
//!
//! - **Always reduced** numerator/denominator pairs with a positive denominator
//! - **Lossless parsing** of decimal strings with hundreds of digits
//! - **Nine rounding modes** shared by every renderer
//! - **Fixed, significant-digit and exponential** output, plus grouping and
//!   separators for display
//! - **Units by composition** for asset amounts and percentages
//!
//! ## Example
//!
//! ```rust
//! use bigfraction::prelude::*;
//!
//! let price = Fraction::parse("1999.995")?;
//! let qty = Fraction::new(1, 3)?;
//! let total = price.checked_mul(&qty)?;
//!
//! assert_eq!(total.to_fixed(2, RoundingMode::RoundHalfEven, true), "666.66");
//! assert_eq!(total.to_precision(3, RoundingMode::RoundDown)?, "666");
//! assert_eq!(total.to_exponential(2, RoundingMode::RoundHalfUp, true), "6.67e+2");
//!
//! // 0.1 + 0.2 is exactly 0.3
//! assert!(Fraction::from_f64(0.1)?.checked_add(0.2)?.equals("0.3")?);
//! # Ok::<(), NumericError>(())
//! ```

pub mod config;
pub mod measure;
pub mod numeric;
pub mod render;


// Re-exports for convenience
pub mod prelude {
    pub use crate::config::RenderConfig;
    pub use crate::measure::{Amount, Asset, Measure, Percent, Percentage, Unit};
    pub use crate::numeric::{Fraction, FractionRepr, IntoFraction, NumericError, NumericResult};
    pub use crate::render::{DecimalExpansion, FormatOptions, RoundingMode};
}
