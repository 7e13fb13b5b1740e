// ============================================================================
// Measure
// A fraction tagged with a unit; arithmetic delegates to the fraction
// ============================================================================

use super::unit::{Asset, Percent, Unit};
use crate::numeric::{Fraction, IntoFraction, NumericError, NumericResult};
use crate::render::RoundingMode;
use num_bigint::BigInt;
use std::cmp::Ordering;
use std::fmt;

/// A value in some unit.
///
/// Arithmetic unwraps to the inner [`Fraction`], computes, and rewraps with
/// the same unit. Combining two measures requires equal units.
///
/// # Example
/// ```
/// use bigfraction::measure::{Amount, Asset};
/// use bigfraction::render::RoundingMode;
///
/// let usdc = Asset::new("USDC", 6);
/// let a = Amount::from_raw(1_500_000, usdc.clone());
/// let b = Amount::parse("0.25", usdc)?;
/// let total = a.checked_add(&b)?;
/// assert_eq!(total.to_display(RoundingMode::RoundDown), "1.750000 USDC");
/// # Ok::<(), bigfraction::numeric::NumericError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Measure<U: Unit> {
    value: Fraction,
    unit: U,
}

/// Token or currency amount
pub type Amount = Measure<Asset>;

/// Ratio shown as a percentage
pub type Percentage = Measure<Percent>;

impl<U: Unit> Measure<U> {
    pub fn new(value: Fraction, unit: U) -> Self {
        Self { value, unit }
    }

    /// # Errors
    /// Returns `Parse` if `value` is not numeric.
    pub fn from_value<T: IntoFraction>(value: T, unit: U) -> NumericResult<Self> {
        Ok(Self::new(value.into_fraction()?, unit))
    }

    /// # Errors
    /// Returns `Parse` if `input` is not a decimal literal.
    pub fn parse(input: &str, unit: U) -> NumericResult<Self> {
        Self::from_value(input, unit)
    }

    pub fn zero(unit: U) -> Self {
        Self::new(Fraction::zero(), unit)
    }

    #[inline]
    pub fn value(&self) -> &Fraction {
        &self.value
    }

    #[inline]
    pub fn unit(&self) -> &U {
        &self.unit
    }

    pub fn into_parts(self) -> (Fraction, U) {
        (self.value, self.unit)
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn ensure_same_unit(&self, other: &Self) -> NumericResult<()> {
        if self.unit == other.unit {
            return Ok(());
        }
        tracing::debug!(
            expected = self.unit.symbol(),
            found = other.unit.symbol(),
            "measure unit mismatch"
        );
        Err(NumericError::UnitMismatch {
            expected: self.unit.symbol().to_string(),
            found: other.unit.symbol().to_string(),
        })
    }

    fn rewrap(&self, value: Fraction) -> Self {
        Self::new(value, self.unit.clone())
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// # Errors
    /// Returns `UnitMismatch` if the units differ.
    pub fn checked_add(&self, other: &Self) -> NumericResult<Self> {
        self.ensure_same_unit(other)?;
        Ok(self.rewrap(&self.value + &other.value))
    }

    /// # Errors
    /// Returns `UnitMismatch` if the units differ.
    pub fn checked_sub(&self, other: &Self) -> NumericResult<Self> {
        self.ensure_same_unit(other)?;
        Ok(self.rewrap(&self.value - &other.value))
    }

    /// Scale by a unitless factor.
    ///
    /// # Errors
    /// Returns `Parse` if `factor` is not numeric.
    pub fn checked_mul<T: IntoFraction>(&self, factor: T) -> NumericResult<Self> {
        Ok(self.rewrap(self.value.checked_mul(factor)?))
    }

    /// Divide by a unitless factor.
    ///
    /// # Errors
    /// - `Parse` if `divisor` is not numeric
    /// - `DivisionByZero` if `divisor` is zero
    pub fn checked_div<T: IntoFraction>(&self, divisor: T) -> NumericResult<Self> {
        Ok(self.rewrap(self.value.checked_div(divisor)?))
    }

    /// Unitless ratio of two measures in the same unit.
    ///
    /// # Errors
    /// - `UnitMismatch` if the units differ
    /// - `DivisionByZero` if `other` is zero
    pub fn ratio(&self, other: &Self) -> NumericResult<Fraction> {
        self.ensure_same_unit(other)?;
        self.value.checked_div(&other.value)
    }

    pub fn negate(&self) -> Self {
        self.rewrap(self.value.negate())
    }

    pub fn abs(&self) -> Self {
        self.rewrap(self.value.abs())
    }

    /// # Errors
    /// Returns `UnitMismatch` if the units differ.
    pub fn compare(&self, other: &Self) -> NumericResult<Ordering> {
        self.ensure_same_unit(other)?;
        Ok(self.value.cmp(&other.value))
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Fixed-point rendering at the unit's decimals, without the symbol.
    pub fn to_fixed(&self, mode: RoundingMode) -> String {
        let shown = &self.value * &self.unit.display_factor();
        shown.to_fixed(self.unit.decimals(), mode, true)
    }

    /// Fixed-point rendering with the unit's symbol attached.
    pub fn to_display(&self, mode: RoundingMode) -> String {
        self.unit.decorate(&self.to_fixed(mode))
    }

    /// # Errors
    /// Returns `InvalidArgument` if `significant_digits` is zero.
    pub fn to_significant(&self, significant_digits: u32, mode: RoundingMode) -> NumericResult<String> {
        let shown = &self.value * &self.unit.display_factor();
        shown.to_significant(significant_digits, mode)
    }
}

// ============================================================================
// Assets
// ============================================================================

impl Measure<Asset> {
    /// Amount from an integer count of the asset's smallest unit
    /// (`1_500_000` base units of a 6-decimal token is `1.5`).
    pub fn from_raw(raw: impl Into<BigInt>, asset: Asset) -> Self {
        let value = Fraction::from_integer(raw).normalize_decimals(asset.decimals);
        Self::new(value, asset)
    }

    /// Whole base units, truncated toward zero.
    pub fn raw_amount(&self) -> BigInt {
        self.value.expand_decimals(self.unit.decimals).quotient()
    }
}

// ============================================================================
// Percentages
// ============================================================================

impl Measure<Percent> {
    /// Percentage from a ratio (`0.125` is 12.5%).
    ///
    /// # Errors
    /// Returns `Parse` if `ratio` is not numeric.
    pub fn from_ratio<T: IntoFraction>(ratio: T) -> NumericResult<Self> {
        Self::from_value(ratio, Percent)
    }

    /// Apply the percentage to another value.
    ///
    /// # Errors
    /// Returns `Parse` if `value` is not numeric.
    pub fn of<T: IntoFraction>(&self, value: T) -> NumericResult<Fraction> {
        value.into_fraction()?.checked_mul(&self.value)
    }
}

impl<U: Unit> fmt::Display for Measure<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display(RoundingMode::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usdc() -> Asset {
        Asset::new("USDC", 6)
    }

    fn eth() -> Asset {
        Asset::new("ETH", 18)
    }

    #[test]
    fn test_raw_amount_round_trip() {
        let amount = Amount::from_raw(1_500_000, usdc());
        assert_eq!(amount.value(), &Fraction::parse("1.5").unwrap());
        assert_eq!(amount.raw_amount(), BigInt::from(1_500_000));
    }

    #[test]
    fn test_raw_amount_truncates() {
        let amount = Amount::parse("0.0000015", usdc()).unwrap();
        assert_eq!(amount.raw_amount(), BigInt::from(1));
    }

    #[test]
    fn test_add_same_unit() {
        let a = Amount::parse("1.25", usdc()).unwrap();
        let b = Amount::parse("0.75", usdc()).unwrap();
        let sum = a.checked_add(&b).unwrap();
        assert_eq!(sum.value(), &Fraction::from_integer(2));
        assert_eq!(sum.unit(), &usdc());
        assert_eq!(a.checked_sub(&b).unwrap().to_fixed(RoundingMode::RoundDown), "0.500000");
    }

    #[test]
    fn test_unit_mismatch() {
        let a = Amount::parse("1", usdc()).unwrap();
        let b = Amount::parse("1", eth()).unwrap();
        assert_eq!(
            a.checked_add(&b),
            Err(NumericError::UnitMismatch {
                expected: "USDC".to_string(),
                found: "ETH".to_string(),
            })
        );
        assert!(a.compare(&b).is_err());
        assert!(a.ratio(&b).is_err());
    }

    #[test]
    fn test_scalar_arithmetic_keeps_unit() {
        let a = Amount::parse("3", usdc()).unwrap();
        let third = a.checked_div(3).unwrap();
        assert_eq!(third.value(), &Fraction::one());
        assert_eq!(a.checked_mul("0.5").unwrap().to_display(RoundingMode::RoundDown), "1.500000 USDC");
        assert_eq!(a.checked_div(0), Err(NumericError::DivisionByZero));
        assert_eq!(a.negate().abs(), a);
    }

    #[test]
    fn test_ratio_and_compare() {
        let a = Amount::parse("1", usdc()).unwrap();
        let b = Amount::parse("4", usdc()).unwrap();
        assert_eq!(a.ratio(&b).unwrap(), Fraction::parse("0.25").unwrap());
        assert_eq!(a.compare(&b).unwrap(), Ordering::Less);
        assert_eq!(a.ratio(&Amount::zero(usdc())), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_percent_rendering() {
        let pct = Percentage::from_ratio("0.125").unwrap();
        assert_eq!(pct.to_display(RoundingMode::RoundHalfUp), "12.50%");
        assert_eq!(pct.to_string(), "12.50%");
        assert_eq!(pct.to_significant(2, RoundingMode::RoundHalfUp).unwrap(), "13");
        assert_eq!(pct.of(200).unwrap(), Fraction::from_integer(25));
    }

    #[test]
    fn test_display_uses_default_rounding() {
        let a = Amount::parse("1.0000005", usdc()).unwrap();
        assert_eq!(a.to_string(), "1.000001 USDC");
    }
}
