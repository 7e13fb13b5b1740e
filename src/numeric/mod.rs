// ============================================================================
// Numeric Module
// Exact rational arithmetic over arbitrary-precision integers
// ============================================================================
//
// This module provides:
// - Fraction: reduced numerator/denominator pair of BigInts
// - IntoFraction: coercion of integers, strings, floats and decimals
// - NumericError: Error types for parsing and arithmetic
// - gcd / parse_decimal: the building blocks behind normalization
//
// Design principles:
// - No floating-point operations on values (floats are only an input format)
// - All fallible operations return Result (no panics)
// - Every value is stored reduced with a positive denominator

mod convert;
mod errors;
mod fraction;
mod gcd;
mod ops;
mod parse;

pub use convert::{FractionRepr, IntoFraction};
pub use errors::{NumericError, NumericResult};
pub use fraction::Fraction;
pub use gcd::gcd;
pub use parse::{parse_decimal, parse_f64, MAX_EXPONENT};
