// ============================================================================
// Rounding Modes
// Shared decision table for every decimal renderer
// ============================================================================

use crate::numeric::NumericError;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::ToPrimitive;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How to resolve digits that do not fit the requested precision.
///
/// The `Half*` modes only differ when the discarded part is exactly one
/// half; the rest are directed modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Away from zero
    RoundUp,
    /// Toward zero (truncate)
    RoundDown,
    /// Toward positive infinity
    RoundCeil,
    /// Toward negative infinity
    RoundFloor,
    /// Nearest, ties away from zero
    #[default]
    RoundHalfUp,
    /// Nearest, ties toward zero
    RoundHalfDown,
    /// Nearest, ties to the even neighbour (banker's rounding)
    RoundHalfEven,
    /// Nearest, ties toward positive infinity
    RoundHalfCeil,
    /// Nearest, ties toward negative infinity
    RoundHalfFloor,
}

impl RoundingMode {
    pub const ALL: [RoundingMode; 9] = [
        RoundingMode::RoundUp,
        RoundingMode::RoundDown,
        RoundingMode::RoundCeil,
        RoundingMode::RoundFloor,
        RoundingMode::RoundHalfUp,
        RoundingMode::RoundHalfDown,
        RoundingMode::RoundHalfEven,
        RoundingMode::RoundHalfCeil,
        RoundingMode::RoundHalfFloor,
    ];

    /// Whether the last kept digit of the magnitude goes up by one.
    ///
    /// `next_digit` is the first discarded digit. It must already account
    /// for anything discarded after it (see [`sticky_digit`]), so a `5`
    /// here means an exact tie.
    pub fn should_increment(self, next_digit: u8, last_kept_is_odd: bool, is_positive: bool) -> bool {
        use RoundingMode::*;
        match self {
            RoundUp => true,
            RoundDown => false,
            RoundCeil => is_positive,
            RoundFloor => !is_positive,
            RoundHalfUp => next_digit >= 5,
            RoundHalfDown => next_digit > 5,
            RoundHalfEven => match next_digit {
                5 => last_kept_is_odd,
                d => d > 5,
            },
            RoundHalfCeil => match next_digit {
                5 => is_positive,
                d => d > 5,
            },
            RoundHalfFloor => match next_digit {
                5 => !is_positive,
                d => d > 5,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        use RoundingMode::*;
        match self {
            RoundUp => "ROUND_UP",
            RoundDown => "ROUND_DOWN",
            RoundCeil => "ROUND_CEIL",
            RoundFloor => "ROUND_FLOOR",
            RoundHalfUp => "ROUND_HALF_UP",
            RoundHalfDown => "ROUND_HALF_DOWN",
            RoundHalfEven => "ROUND_HALF_EVEN",
            RoundHalfCeil => "ROUND_HALF_CEIL",
            RoundHalfFloor => "ROUND_HALF_FLOOR",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = NumericError;

    /// Accepts the constant names (`"ROUND_HALF_EVEN"`) in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RoundingMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| NumericError::invalid_argument(format!("unknown rounding mode {s:?}")))
    }
}

/// Fold the tail after the first discarded digit into that digit.
///
/// A `5` followed by more non-zero digits is above the half-way point and
/// is reported as `6`; every other digit already decides alone.
#[inline]
pub fn sticky_digit(next_digit: u8, tail_is_nonzero: bool) -> u8 {
    if next_digit == 5 && tail_is_nonzero {
        6
    } else {
        next_digit
    }
}

/// Outcome of rounding a fixed number of decimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundedDecimal {
    /// Units to add to the integer part (zero or one)
    pub carry: BigUint,
    /// Decimal digits, exactly `decimal_places` long
    pub decimal_part: String,
}

/// Apply `mode` to a magnitude split into integer and decimal digits.
///
/// `decimal_part` holds the kept decimal digits as an integer (so `0.0123`
/// at four places is `123`). A carry out of the decimal digits, as in
/// `9.99` rounding up to `10.0`, comes back as `carry` for the caller to
/// add to the integer part.
pub fn resolve_rounding(
    mode: RoundingMode,
    next_digit: u8,
    decimal_part: &BigUint,
    integer_part: &BigUint,
    is_positive: bool,
    decimal_places: u32,
) -> RoundedDecimal {
    let last_kept = if decimal_places == 0 {
        integer_part
    } else {
        decimal_part
    };
    let increment = mode.should_increment(next_digit, last_kept.is_odd(), is_positive);

    let mut adjusted = decimal_part.clone();
    if increment {
        adjusted += 1u8;
    }

    let (carry, kept) = adjusted.div_rem(&pow10_unsigned(decimal_places));

    RoundedDecimal {
        carry,
        decimal_part: pad_digits(&kept, decimal_places),
    }
}

/// Left-pad `value` with zeros to exactly `width` digits; empty for width 0.
pub(crate) fn pad_digits(value: &BigUint, width: u32) -> String {
    let width = width.to_usize().unwrap_or(usize::MAX);
    if width == 0 {
        return String::new();
    }
    format!("{:0>width$}", value.to_string(), width = width)
}

/// `10^exp` as a `BigUint`.
pub(crate) fn pow10_unsigned(exp: u32) -> BigUint {
    num_traits::pow(BigUint::from(10u8), exp as usize)
}

/// Reattach a sign to a magnitude.
pub(crate) fn signed(magnitude: BigUint, negative: bool) -> BigInt {
    let value = BigInt::from(magnitude);
    if negative {
        -value
    } else {
        value
    }
}
