// ============================================================================
// Conversions
// Coercion of native values into fractions and boundary representations
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fraction::Fraction;
use super::parse::pow10;
use crate::render::RoundingMode;
use num_bigint::BigInt;
use rust_decimal::Decimal;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Coercion
// ============================================================================

/// Anything that can stand in for a fraction operand.
///
/// Integers convert without a parse step, strings go through the decimal
/// literal parser and floats through their shortest decimal rendering.
pub trait IntoFraction {
    /// # Errors
    /// Returns `Parse` when the value is not numeric.
    fn into_fraction(self) -> NumericResult<Fraction>;
}

impl IntoFraction for Fraction {
    #[inline]
    fn into_fraction(self) -> NumericResult<Fraction> {
        Ok(self)
    }
}

impl IntoFraction for &Fraction {
    #[inline]
    fn into_fraction(self) -> NumericResult<Fraction> {
        Ok(self.clone())
    }
}

impl IntoFraction for &str {
    fn into_fraction(self) -> NumericResult<Fraction> {
        Fraction::parse(self)
    }
}

impl IntoFraction for String {
    fn into_fraction(self) -> NumericResult<Fraction> {
        Fraction::parse(&self)
    }
}

impl IntoFraction for &String {
    fn into_fraction(self) -> NumericResult<Fraction> {
        Fraction::parse(self)
    }
}

impl IntoFraction for BigInt {
    #[inline]
    fn into_fraction(self) -> NumericResult<Fraction> {
        Ok(Fraction::from_integer(self))
    }
}

impl IntoFraction for &BigInt {
    #[inline]
    fn into_fraction(self) -> NumericResult<Fraction> {
        Ok(Fraction::from_integer(self.clone()))
    }
}

impl IntoFraction for f64 {
    fn into_fraction(self) -> NumericResult<Fraction> {
        Fraction::from_f64(self)
    }
}

impl IntoFraction for f32 {
    fn into_fraction(self) -> NumericResult<Fraction> {
        if !self.is_finite() {
            return Err(NumericError::parse(self.to_string()));
        }
        // f32's own shortest rendering; widening to f64 first would print
        // the binary expansion of the f32 value instead.
        Fraction::parse(&self.to_string())
    }
}

impl IntoFraction for Decimal {
    fn into_fraction(self) -> NumericResult<Fraction> {
        Ok(Fraction::from_decimal(self))
    }
}

macro_rules! impl_into_fraction_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoFraction for $t {
                #[inline]
                fn into_fraction(self) -> NumericResult<Fraction> {
                    Ok(Fraction::from_integer(self))
                }
            }

            impl From<$t> for Fraction {
                #[inline]
                fn from(value: $t) -> Self {
                    Fraction::from_integer(value)
                }
            }
        )*
    };
}

impl_into_fraction_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Fraction::from_integer(value)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

/// Most decimal places a `rust_decimal::Decimal` can carry.
const DECIMAL_MAX_SCALE: u32 = 28;

impl From<Decimal> for Fraction {
    fn from(value: Decimal) -> Self {
        Fraction::from_decimal(value)
    }
}

impl Fraction {
    /// Convert from `rust_decimal::Decimal`. Always exact.
    pub fn from_decimal(d: Decimal) -> Self {
        Fraction::reduced(BigInt::from(d.mantissa()), pow10(d.scale()))
    }

    /// Convert to `rust_decimal::Decimal`, rounding to `decimal_places`.
    ///
    /// # Errors
    /// Returns `Overflow` if the rounded value does not fit a `Decimal`
    /// (96-bit mantissa, at most 28 decimal places).
    pub fn to_decimal(&self, decimal_places: u32, mode: RoundingMode) -> NumericResult<Decimal> {
        if decimal_places > DECIMAL_MAX_SCALE {
            return Err(NumericError::Overflow);
        }
        let rendered = self.to_fixed(decimal_places, mode, true);
        Decimal::from_str_exact(&rendered).map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// Textual Record
// ============================================================================

/// Transport form of a fraction: both integers as decimal strings, so the
/// value survives formats that cannot carry big integers (JSON).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FractionRepr {
    pub numerator: String,
    pub denominator: String,
}

impl From<&Fraction> for FractionRepr {
    fn from(value: &Fraction) -> Self {
        Self {
            numerator: value.numerator().to_string(),
            denominator: value.denominator().to_string(),
        }
    }
}

impl From<Fraction> for FractionRepr {
    fn from(value: Fraction) -> Self {
        Self::from(&value)
    }
}

impl TryFrom<FractionRepr> for Fraction {
    type Error = NumericError;

    /// # Errors
    /// - `Parse` if either field is not an integer literal
    /// - `DivisionByZero` if the denominator is zero
    fn try_from(repr: FractionRepr) -> Result<Self, Self::Error> {
        let numerator = BigInt::from_str(repr.numerator.trim())
            .map_err(|_| NumericError::parse(repr.numerator.as_str()))?;
        let denominator = BigInt::from_str(repr.denominator.trim())
            .map_err(|_| NumericError::parse(repr.denominator.as_str()))?;
        Fraction::from_parts(numerator, denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_coercion() {
        assert_eq!(7u8.into_fraction().unwrap(), Fraction::from_integer(7));
        assert_eq!((-7i128).into_fraction().unwrap(), Fraction::from_integer(-7));
        assert_eq!(Fraction::from(42usize), Fraction::from_integer(42));
    }

    #[test]
    fn test_string_coercion() {
        assert_eq!("0.5".into_fraction().unwrap(), Fraction::from_parts(1, 2).unwrap());
        assert_eq!(
            String::from("-2.25").into_fraction().unwrap(),
            Fraction::from_parts(-9, 4).unwrap()
        );
        assert!("1.2.3".into_fraction().is_err());
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(0.1f32.into_fraction().unwrap(), Fraction::from_parts(1, 10).unwrap());
        assert_eq!(2.5f64.into_fraction().unwrap(), Fraction::from_parts(5, 2).unwrap());
        assert!(f32::NAN.into_fraction().is_err());
    }

    #[test]
    fn test_from_decimal() {
        let d = Decimal::new(12345, 2); // 123.45
        let x = Fraction::from_decimal(d);
        assert_eq!(x, Fraction::parse("123.45").unwrap());
        assert_eq!(x.denominator(), &BigInt::from(20));
    }

    #[test]
    fn test_to_decimal() {
        let third = Fraction::from_parts(1, 3).unwrap();
        let d = third.to_decimal(2, RoundingMode::RoundHalfUp).unwrap();
        assert_eq!(d, Decimal::new(33, 2));

        let two_thirds = Fraction::from_parts(2, 3).unwrap();
        let d = two_thirds.to_decimal(4, RoundingMode::RoundDown).unwrap();
        assert_eq!(d.to_string(), "0.6666");
    }

    #[test]
    fn test_to_decimal_overflow() {
        let huge = Fraction::parse(&format!("1{}", "0".repeat(40))).unwrap();
        assert_eq!(
            huge.to_decimal(0, RoundingMode::RoundDown),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            Fraction::one().to_decimal(29, RoundingMode::RoundDown),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_repr_conversion() {
        let x = Fraction::from_parts(-3, 4).unwrap();
        let repr = FractionRepr::from(&x);
        assert_eq!(repr.numerator, "-3");
        assert_eq!(repr.denominator, "4");
        assert_eq!(Fraction::try_from(repr).unwrap(), x);
    }

    #[test]
    fn test_repr_rejects_bad_fields() {
        let zero_den = FractionRepr {
            numerator: "1".to_string(),
            denominator: "0".to_string(),
        };
        assert_eq!(Fraction::try_from(zero_den), Err(NumericError::DivisionByZero));

        let bad = FractionRepr {
            numerator: "1.5".to_string(),
            denominator: "2".to_string(),
        };
        assert!(matches!(Fraction::try_from(bad), Err(NumericError::Parse { .. })));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let x = Fraction::parse("-12.125").unwrap();
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, r#"{"numerator":"-97","denominator":"8"}"#);
        let back: Fraction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);

        let bad: Result<Fraction, _> =
            serde_json::from_str(r#"{"numerator":"1","denominator":"0"}"#);
        assert!(bad.is_err());
    }
}
