// ============================================================================
// Fraction
// Exact rational value over arbitrary-precision integers
// ============================================================================

use super::convert::IntoFraction;
use super::errors::{NumericError, NumericResult};
use super::gcd::gcd;
use super::parse::{parse_decimal, parse_f64, pow10};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact rational number `numerator / denominator`.
///
/// Every constructor and operation returns a reduced value: the numerator
/// and denominator are coprime, the denominator is positive, and zero is
/// always stored as `0/1`. Values are immutable; every operation produces
/// a new `Fraction`.
///
/// # Example
/// ```
/// use bigfraction::numeric::Fraction;
///
/// let a = Fraction::parse("0.1")?;
/// let sum = a.checked_add(0.2)?;
/// assert!(sum.equals("0.3")?);
/// assert_eq!(sum.to_string(), "3/10");
/// # Ok::<(), bigfraction::numeric::NumericError>(())
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "super::convert::FractionRepr", try_from = "super::convert::FractionRepr")
)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a fraction from two values that each coerce into a fraction.
    ///
    /// `numerator / denominator` is computed exactly, so
    /// `Fraction::new("1.5", "0.5")` is `3`.
    ///
    /// # Errors
    /// - `Parse` if either argument is not numeric
    /// - `DivisionByZero` if the denominator evaluates to zero
    pub fn new<N: IntoFraction, D: IntoFraction>(numerator: N, denominator: D) -> NumericResult<Self> {
        let n = numerator.into_fraction()?;
        let d = denominator.into_fraction()?;
        Self::from_parts(n.numerator * d.denominator, n.denominator * d.numerator)
    }

    /// Create from a raw integer pair and reduce it.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `denominator` is zero.
    pub fn from_parts(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> NumericResult<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::reduced(numerator.into(), denominator))
    }

    /// Create from an integer. Skips reduction entirely.
    #[inline]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    /// Parse a decimal literal such as `"-12.345"` or `"1.5e3"`.
    ///
    /// Empty and whitespace-only input is zero.
    ///
    /// # Errors
    /// Returns `Parse` if the input is not a signed decimal literal.
    pub fn parse(input: &str) -> NumericResult<Self> {
        let (numerator, denominator) = parse_decimal(input)?;
        Ok(Self::reduced(numerator, denominator))
    }

    /// Like [`Fraction::parse`], but reports invalid input as `None`.
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    /// Create from a native float via its shortest decimal rendering.
    ///
    /// # Errors
    /// Returns `Parse` for NaN and infinities.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        let (numerator, denominator) = parse_f64(value)?;
        Ok(Self::reduced(numerator, denominator))
    }

    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    pub fn one() -> Self {
        Self::from_integer(1)
    }

    /// Normalize sign and divide out the common factor.
    ///
    /// Callers guarantee a non-zero denominator.
    pub(crate) fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());
        if numerator.is_zero() {
            return Self::zero();
        }
        let (mut numerator, mut denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        let common = gcd(&numerator, &denominator);
        if !common.is_one() {
            numerator /= &common;
            denominator /= &common;
        }
        Self {
            numerator,
            denominator,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Always positive.
    #[inline]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Consume into the `(numerator, denominator)` pair.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        match self.numerator.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    // ========================================================================
    // Integer Parts
    // ========================================================================

    /// Integer division truncated toward zero.
    pub fn quotient(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    /// What is left after [`Fraction::quotient`]; carries the sign of the value.
    pub fn remainder(&self) -> Self {
        Self::reduced(&self.numerator % &self.denominator, self.denominator.clone())
    }

    /// Largest integer not greater than the value.
    pub fn floor(&self) -> BigInt {
        self.numerator.div_floor(&self.denominator)
    }

    /// Smallest integer not less than the value.
    pub fn ceil(&self) -> BigInt {
        self.numerator.div_ceil(&self.denominator)
    }

    // ========================================================================
    // Unary Operations
    // ========================================================================

    /// Swap numerator and denominator.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the value is zero.
    pub fn invert(&self) -> NumericResult<Self> {
        if self.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::reduced(self.denominator.clone(), self.numerator.clone()))
    }

    pub fn negate(&self) -> Self {
        Self {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }

    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.negate()
        } else {
            self.clone()
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare against anything that coerces into a fraction.
    ///
    /// # Errors
    /// Returns `Parse` if `other` is not numeric.
    pub fn compare<T: IntoFraction>(&self, other: T) -> NumericResult<Ordering> {
        let other = other.into_fraction()?;
        Ok(cross_cmp(
            &self.numerator,
            &self.denominator,
            &other.numerator,
            &other.denominator,
        ))
    }

    pub fn equals<T: IntoFraction>(&self, other: T) -> NumericResult<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    pub fn not_equals<T: IntoFraction>(&self, other: T) -> NumericResult<bool> {
        Ok(self.compare(other)? != Ordering::Equal)
    }

    pub fn less_than<T: IntoFraction>(&self, other: T) -> NumericResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn less_than_or_equal<T: IntoFraction>(&self, other: T) -> NumericResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    pub fn greater_than<T: IntoFraction>(&self, other: T) -> NumericResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn greater_than_or_equal<T: IntoFraction>(&self, other: T) -> NumericResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact addition.
    ///
    /// # Errors
    /// Returns `Parse` if `other` is not numeric.
    pub fn checked_add<T: IntoFraction>(&self, other: T) -> NumericResult<Self> {
        let other = other.into_fraction()?;
        Ok(self.add_fraction(&other))
    }

    /// Exact subtraction.
    ///
    /// # Errors
    /// Returns `Parse` if `other` is not numeric.
    pub fn checked_sub<T: IntoFraction>(&self, other: T) -> NumericResult<Self> {
        let other = other.into_fraction()?;
        Ok(self.sub_fraction(&other))
    }

    /// Exact multiplication.
    ///
    /// # Errors
    /// Returns `Parse` if `other` is not numeric.
    pub fn checked_mul<T: IntoFraction>(&self, other: T) -> NumericResult<Self> {
        let other = other.into_fraction()?;
        Ok(self.mul_fraction(&other))
    }

    /// Exact division.
    ///
    /// # Errors
    /// - `Parse` if `other` is not numeric
    /// - `DivisionByZero` if `other` is zero
    pub fn checked_div<T: IntoFraction>(&self, other: T) -> NumericResult<Self> {
        let other = other.into_fraction()?;
        if other.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::reduced(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        ))
    }

    /// Multiply by `10^decimals`, e.g. to turn a token amount into base units.
    pub fn expand_decimals(&self, decimals: u32) -> Self {
        Self::reduced(&self.numerator * pow10(decimals), self.denominator.clone())
    }

    /// Divide by `10^decimals`, e.g. to turn base units into a token amount.
    pub fn normalize_decimals(&self, decimals: u32) -> Self {
        Self::reduced(self.numerator.clone(), &self.denominator * pow10(decimals))
    }

    pub(crate) fn add_fraction(&self, other: &Self) -> Self {
        if self.denominator == other.denominator {
            return Self::reduced(
                &self.numerator + &other.numerator,
                self.denominator.clone(),
            );
        }
        Self::reduced(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    pub(crate) fn sub_fraction(&self, other: &Self) -> Self {
        self.add_fraction(&other.negate())
    }

    pub(crate) fn mul_fraction(&self, other: &Self) -> Self {
        Self::reduced(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }
}

/// Compare `an/ad` with `bn/bd` by cross-multiplication.
///
/// Correct for any non-zero denominator signs: when exactly one denominator
/// is negative the cross products compare the other way round.
pub(crate) fn cross_cmp(an: &BigInt, ad: &BigInt, bn: &BigInt, bd: &BigInt) -> Ordering {
    let ordering = (an * bd).cmp(&(bn * ad));
    if ad.is_negative() != bd.is_negative() {
        ordering.reverse()
    } else {
        ordering
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        cross_cmp(
            &self.numerator,
            &self.denominator,
            &other.numerator,
            &other.denominator,
        ) == Ordering::Equal
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        cross_cmp(
            &self.numerator,
            &self.denominator,
            &other.numerator,
            &other.denominator,
        )
    }
}

// Reduced form is canonical, so hashing the fields agrees with `eq`.
impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl std::str::FromStr for Fraction {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::from_parts(n, d).unwrap()
    }

    fn big(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_construction_reduces() {
        let x = frac(2, 4);
        assert_eq!(x.numerator(), &big(1));
        assert_eq!(x.denominator(), &big(2));

        let y = frac(-6, -9);
        assert_eq!(y.numerator(), &big(2));
        assert_eq!(y.denominator(), &big(3));

        let z = frac(6, -9);
        assert_eq!(z.numerator(), &big(-2));
        assert_eq!(z.denominator(), &big(3));
    }

    #[test]
    fn test_zero_is_canonical() {
        let zero = frac(0, 100);
        assert_eq!(zero.numerator(), &big(0));
        assert_eq!(zero.denominator(), &big(1));
        assert_eq!(frac(0, -5).denominator(), &big(1));
        assert!(zero.is_zero());
    }

    #[test]
    fn test_zero_denominator_fails() {
        assert_eq!(Fraction::from_parts(1, 0), Err(NumericError::DivisionByZero));
        assert_eq!(Fraction::new(1, 0), Err(NumericError::DivisionByZero));
        assert_eq!(Fraction::new("1", "0.0"), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_new_combines_both_arguments() {
        assert_eq!(Fraction::new("1.5", "0.5").unwrap(), Fraction::from_integer(3));
        assert_eq!(Fraction::new(1, 3).unwrap(), frac(1, 3));
        assert_eq!(Fraction::new(frac(1, 2), frac(3, 4)).unwrap(), frac(2, 3));
        assert!(Fraction::new("abc", 1).is_err());
    }

    #[test]
    fn test_parse_and_try_parse() {
        assert_eq!(Fraction::parse("0.25").unwrap(), frac(1, 4));
        assert_eq!(Fraction::parse("").unwrap(), Fraction::zero());
        assert!(Fraction::try_parse("1,000").is_none());
        assert_eq!(Fraction::try_parse("-1.5"), Some(frac(-3, 2)));
        let parsed: Fraction = "12.5".parse().unwrap();
        assert_eq!(parsed, frac(25, 2));
    }

    #[test]
    fn test_quotient_and_remainder() {
        assert_eq!(frac(7, 2).quotient(), big(3));
        assert_eq!(frac(-7, 2).quotient(), big(-3));
        assert_eq!(frac(7, 2).remainder(), frac(1, 2));
        assert_eq!(frac(-7, 2).remainder(), frac(-1, 2));
        assert_eq!(frac(6, 3).remainder(), Fraction::zero());
    }

    #[test]
    fn test_floor_and_ceil() {
        assert_eq!(frac(7, 2).floor(), big(3));
        assert_eq!(frac(7, 2).ceil(), big(4));
        assert_eq!(frac(-7, 2).floor(), big(-4));
        assert_eq!(frac(-7, 2).ceil(), big(-3));
        assert_eq!(frac(4, 1).ceil(), big(4));
    }

    #[test]
    fn test_invert() {
        assert_eq!(frac(2, 3).invert().unwrap(), frac(3, 2));
        assert_eq!(frac(-2, 3).invert().unwrap(), frac(-3, 2));
        assert_eq!(Fraction::zero().invert(), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_negate_and_abs() {
        assert_eq!(frac(1, 2).negate(), frac(-1, 2));
        assert_eq!(frac(-1, 2).abs(), frac(1, 2));
        assert_eq!(frac(1, 2).abs(), frac(1, 2));
        assert_eq!(Fraction::zero().negate(), Fraction::zero());
    }

    #[test]
    fn test_sign_queries() {
        assert_eq!(frac(-1, 3).signum(), -1);
        assert_eq!(Fraction::zero().signum(), 0);
        assert_eq!(frac(1, 3).signum(), 1);
        assert!(frac(4, 2).is_integer());
        assert!(!frac(1, 2).is_integer());
    }

    #[test]
    fn test_comparisons() {
        let half = frac(1, 2);
        assert!(half.equals("0.5").unwrap());
        assert!(half.equals(frac(2, 4)).unwrap());
        assert!(half.not_equals(1).unwrap());
        assert!(half.less_than("0.75").unwrap());
        assert!(half.less_than_or_equal("0.5").unwrap());
        assert!(half.greater_than(-1).unwrap());
        assert!(half.greater_than_or_equal(frac(1, 3)).unwrap());
        assert!(half.equals("not a number").is_err());
    }

    #[test]
    fn test_cross_cmp_handles_negative_denominators() {
        assert_eq!(cross_cmp(&big(1), &big(-2), &big(-1), &big(2)), Ordering::Equal);
        assert_eq!(cross_cmp(&big(-1), &big(-2), &big(1), &big(2)), Ordering::Equal);
        assert_eq!(cross_cmp(&big(1), &big(-2), &big(1), &big(2)), Ordering::Less);
        assert_eq!(cross_cmp(&big(1), &big(2), &big(1), &big(-3)), Ordering::Greater);
    }

    #[test]
    fn test_ordering_traits() {
        let mut values = vec![frac(1, 2), frac(-3, 4), frac(5, 3), Fraction::zero()];
        values.sort();
        assert_eq!(values, vec![frac(-3, 4), Fraction::zero(), frac(1, 2), frac(5, 3)]);
        assert_eq!(frac(1, 2).max(frac(2, 3)), frac(2, 3));
    }

    #[test]
    fn test_arithmetic() {
        let a = frac(1, 2);
        assert_eq!(a.checked_add(frac(1, 3)).unwrap(), frac(5, 6));
        assert_eq!(a.checked_add(frac(1, 2)).unwrap(), Fraction::one());
        assert_eq!(a.checked_sub("0.75").unwrap(), frac(-1, 4));
        assert_eq!(a.checked_mul(frac(2, 3)).unwrap(), frac(1, 3));
        assert_eq!(a.checked_div(frac(1, 4)).unwrap(), Fraction::from_integer(2));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Fraction::one().checked_div(0), Err(NumericError::DivisionByZero));
        assert_eq!(
            Fraction::one().checked_div("0.000"),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_float_exactness() {
        let sum = Fraction::from_f64(0.1).unwrap().checked_add(0.2).unwrap();
        assert!(sum.equals(0.3).unwrap());
    }

    #[test]
    fn test_large_number_addition() {
        let a = Fraction::parse("12345678901234567890.2345678901234567890").unwrap();
        let sum = a.checked_add("12345678901234567890.345678901234567890").unwrap();
        let expected = Fraction::parse("24691357802469135780.580246791358024679").unwrap();
        assert_eq!(sum, expected);
    }

    #[test]
    fn test_expand_and_normalize_decimals() {
        let x = Fraction::parse("1.5").unwrap();
        assert_eq!(x.expand_decimals(18), Fraction::parse("1500000000000000000").unwrap());
        assert_eq!(
            Fraction::from_integer(1_500_000).normalize_decimals(6),
            Fraction::parse("1.5").unwrap()
        );
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(frac(3, 4).to_string(), "3/4");
        assert_eq!(frac(-8, 2).to_string(), "-4");
        assert_eq!(format!("{:?}", frac(3, 4)), "Fraction(3/4)");
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(frac(1, 2));
        assert!(set.contains(&frac(2, 4)));
        assert!(set.contains(&Fraction::parse("0.5").unwrap()));
    }
}
