// ============================================================================
// Decimal Rendering
// Fixed-point, significant-digit and exponential string conversion
// ============================================================================

use super::long_division::LongDivision;
use super::rounding::{pow10_unsigned, resolve_rounding, signed, sticky_digit, RoundingMode};
use crate::numeric::{Fraction, NumericError, NumericResult};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

/// A rounded magnitude: integer digits plus exactly `decimal_places`
/// decimal digits.
#[derive(Debug)]
struct FixedDigits {
    integer: BigUint,
    decimals: String,
}

impl FixedDigits {
    fn is_zero(&self) -> bool {
        self.integer.is_zero() && self.decimals.bytes().all(|b| b == b'0')
    }

    /// Join with `.`, dropping trailing decimal zeros unless asked to keep them.
    fn render(&self, negative: bool, trailing_zeros: bool) -> String {
        let decimals = if trailing_zeros {
            self.decimals.as_str()
        } else {
            self.decimals.trim_end_matches('0')
        };
        let sign = if negative && !self.is_zero() { "-" } else { "" };
        if decimals.is_empty() {
            format!("{sign}{}", self.integer)
        } else {
            format!("{sign}{}.{decimals}", self.integer)
        }
    }
}

/// Long-divide `numerator / denominator` to `decimal_places` digits and
/// round the rest away with `mode`.
fn fixed_digits(
    numerator: &BigUint,
    denominator: &BigUint,
    decimal_places: u32,
    mode: RoundingMode,
    is_positive: bool,
) -> FixedDigits {
    let (integer, mut division) = LongDivision::start(numerator, denominator);
    let places = decimal_places.to_usize().unwrap_or(usize::MAX);

    let mut decimals = String::new();
    while decimals.len() < places && !division.is_exhausted() {
        decimals.push(char::from(b'0' + division.next_digit()));
    }

    if division.is_exhausted() {
        // Terminated within budget: the value is exact at this precision.
        let missing = places - decimals.len();
        decimals.extend(std::iter::repeat('0').take(missing));
        return FixedDigits { integer, decimals };
    }

    let next = division.next_digit();
    let next = sticky_digit(next, !division.is_exhausted());
    let decimal_part = if decimals.is_empty() {
        BigUint::zero()
    } else {
        BigUint::parse_bytes(decimals.as_bytes(), 10).unwrap_or_default()
    };

    let rounded = resolve_rounding(
        mode,
        next,
        &decimal_part,
        &integer,
        is_positive,
        decimal_places,
    );
    FixedDigits {
        integer: integer + rounded.carry,
        decimals: rounded.decimal_part,
    }
}

/// Number of decimal digits in `value`; zero has none.
fn digit_count(value: &BigUint) -> u32 {
    if value.is_zero() {
        0
    } else {
        value.to_str_radix(10).len() as u32
    }
}

impl Fraction {
    pub(crate) fn magnitude(&self) -> (BigUint, BigUint) {
        (
            self.numerator().magnitude().clone(),
            self.denominator().magnitude().clone(),
        )
    }

    // ========================================================================
    // Fixed Point
    // ========================================================================

    /// Render with exactly `decimal_places` decimal digits.
    ///
    /// With `trailing_zeros == false`, zeros at the end of the decimal part
    /// are dropped (and the point with them). A rounded result of zero never
    /// carries a minus sign.
    ///
    /// # Examples
    /// - `1/3`, 4 places -> `"0.3333"`
    /// - `9.996`, 2 places, half-up -> `"10.00"`
    /// - `1.5`, 0 places, half-even -> `"2"`
    pub fn to_fixed(&self, decimal_places: u32, mode: RoundingMode, trailing_zeros: bool) -> String {
        let (n, d) = self.magnitude();
        fixed_digits(&n, &d, decimal_places, mode, !self.is_negative())
            .render(self.is_negative(), trailing_zeros)
    }

    /// The value rounded to `decimal_places`, as a fraction.
    pub fn round(&self, decimal_places: u32, mode: RoundingMode) -> Fraction {
        let (n, d) = self.magnitude();
        let digits = fixed_digits(&n, &d, decimal_places, mode, !self.is_negative());
        let scale = pow10_unsigned(decimal_places);
        let decimals = BigUint::parse_bytes(digits.decimals.as_bytes(), 10).unwrap_or_default();
        let scaled = digits.integer * &scale + decimals;
        Fraction::reduced(signed(scaled, self.is_negative()), scale.into())
    }

    // ========================================================================
    // Significant Digits
    // ========================================================================

    /// Render with `significant_digits` significant digits.
    ///
    /// When the integer part has no more digits than requested, the rest go
    /// after the decimal point (`123.456` at 4 -> `"123.5"`). A zero integer
    /// part has no significant digits, so a value below one gets exactly
    /// `significant_digits` decimals (`0.0012345` at 3 -> `"0.001"`).
    /// Otherwise the integer part itself is rounded and zero-filled
    /// (`12345` at 2 -> `"12000"`).
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `significant_digits` is zero.
    pub fn to_precision(&self, significant_digits: u32, mode: RoundingMode) -> NumericResult<String> {
        if significant_digits < 1 {
            return Err(NumericError::invalid_argument(
                "significant digits must be at least 1",
            ));
        }

        let (n, d) = self.magnitude();
        if n.is_zero() {
            return Ok(self.to_fixed(significant_digits - 1, mode, true));
        }

        let (quotient, fractional) = n.div_rem(&d);
        let sdc = digit_count(&quotient);

        if sdc <= significant_digits {
            return Ok(self.to_fixed(significant_digits - sdc, mode, true));
        }

        // Coarser than the integer part: round the integer at 10^dropped.
        let dropped = sdc - significant_digits;
        let factor = pow10_unsigned(dropped);
        let (truncated, discarded) = quotient.div_rem(&factor);
        let (next, tail) = discarded.div_rem(&pow10_unsigned(dropped - 1));
        let next = next.to_u8().unwrap_or(9);
        let tail_is_nonzero = !tail.is_zero() || !fractional.is_zero();

        let kept = if next == 0 && !tail_is_nonzero {
            truncated
        } else {
            let rounded = resolve_rounding(
                mode,
                sticky_digit(next, tail_is_nonzero),
                &BigUint::zero(),
                &truncated,
                !self.is_negative(),
                0,
            );
            truncated + rounded.carry
        };

        Ok(signed(kept * factor, self.is_negative()).to_string())
    }

    /// Like [`Fraction::to_precision`] without trailing decimal zeros.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `significant_digits` is zero.
    pub fn to_significant(&self, significant_digits: u32, mode: RoundingMode) -> NumericResult<String> {
        let rendered = self.to_precision(significant_digits, mode)?;
        if !rendered.contains('.') {
            return Ok(rendered);
        }
        let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
        Ok(trimmed.to_string())
    }

    // ========================================================================
    // Exponential
    // ========================================================================

    /// Render as `d.ddd` times a power of ten: `"1.23e+4"`, `"5e-3"`.
    ///
    /// The mantissa has `decimal_places` decimal digits. Zero renders with
    /// exponent `+0`.
    pub fn to_exponential(&self, decimal_places: u32, mode: RoundingMode, trailing_zeros: bool) -> String {
        let (mut n, mut d) = self.magnitude();
        let mut exponent: i64 = 0;

        if !n.is_zero() {
            exponent = i64::from(digit_count(&n)) - i64::from(digit_count(&d));
            let shift = exponent.unsigned_abs() as u32;
            if exponent > 0 {
                d *= pow10_unsigned(shift);
            } else if exponent < 0 {
                n *= pow10_unsigned(shift);
            }
            if n < d {
                n *= 10u8;
                exponent -= 1;
            }
        }

        let mut digits = fixed_digits(&n, &d, decimal_places, mode, !self.is_negative());
        if digits.integer == BigUint::from(10u8) {
            // 9.99.. rounded up past the mantissa range; decimals are all zero
            digits.integer = BigUint::from(1u8);
            exponent += 1;
        }

        let mantissa = digits.render(self.is_negative(), trailing_zeros);
        let sign = if exponent >= 0 { "+" } else { "" };
        format!("{mantissa}e{sign}{exponent}")
    }
}
