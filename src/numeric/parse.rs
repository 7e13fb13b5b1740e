// ============================================================================
// Numeric Literal Parser
// Converts decimal strings and native numbers into exact numerator/denominator
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Largest accepted `|exponent|` in scientific notation.
///
/// `10^exponent` is materialized, so the bound keeps a short literal such as
/// `1e999999999` from turning into a gigabyte allocation.
pub const MAX_EXPONENT: u32 = 100_000;

/// Parse a signed decimal literal into an unreduced `(numerator, denominator)`.
///
/// Accepts an optional sign, digits with at most one decimal point and an
/// optional `e`/`E` exponent. Surrounding whitespace is ignored and an empty
/// or whitespace-only string is zero. The denominator is always a power of
/// ten, so arbitrarily long fractional parts are kept exactly.
///
/// # Errors
/// Returns `Parse` for grouping separators, currency symbols, trailing
/// garbage, repeated decimal points, a bare sign and anything else that is
/// not a decimal literal.
///
/// # Examples
/// - `"12.5"` -> `(125, 10)`
/// - `"-0.001"` -> `(-1, 1000)`
/// - `"  "` -> `(0, 1)`
pub fn parse_decimal(input: &str) -> NumericResult<(BigInt, BigInt)> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok((BigInt::zero(), BigInt::one()));
    }

    let reject = || {
        tracing::trace!(input, "rejected numeric literal");
        NumericError::parse(input)
    };

    let (is_negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
        None => (unsigned, None),
    };

    let (int_digits, frac_digits) = match mantissa.find('.') {
        Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
        None => (mantissa, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(reject());
    }
    if !all_digits(int_digits) || !all_digits(frac_digits) {
        return Err(reject());
    }

    let (exponent_negative, exponent) = match exponent {
        Some(raw) => parse_exponent(raw).ok_or_else(reject)?,
        None => (false, 0),
    };

    let digits = format!("{int_digits}{frac_digits}");
    let mut numerator = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(reject)?;
    let frac_len = u32::try_from(frac_digits.len()).map_err(|_| reject())?;
    let mut denominator = pow10(frac_len);

    if exponent_negative {
        denominator *= pow10(exponent);
    } else {
        numerator *= pow10(exponent);
    }

    if is_negative {
        numerator = -numerator;
    }

    Ok((numerator, denominator))
}

/// Parse a native float through its shortest round-trip decimal rendering.
///
/// The result is exact for the decimal text the float prints as, which is
/// the float's own precision ceiling: `0.1` becomes `1/10`, not the binary
/// approximation actually stored. Prefer string input when every digit
/// matters.
///
/// # Errors
/// Returns `Parse` for NaN and infinities.
pub fn parse_f64(value: f64) -> NumericResult<(BigInt, BigInt)> {
    if !value.is_finite() {
        tracing::trace!(value, "rejected non-finite float");
        return Err(NumericError::parse(value.to_string()));
    }
    parse_decimal(&value.to_string())
}

/// Split an exponent into its sign and magnitude, `"-12"` -> `(true, 12)`.
fn parse_exponent(raw: &str) -> Option<(bool, u32)> {
    let (negative, digits) = match raw.as_bytes().first()? {
        b'-' => (true, &raw[1..]),
        b'+' => (false, &raw[1..]),
        _ => (false, raw),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude: u32 = digits.parse().ok()?;
    if magnitude > MAX_EXPONENT {
        return None;
    }
    Some((negative, magnitude))
}

/// `10^exp` as a `BigInt`.
pub(crate) fn pow10(exp: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exp as usize)
}
