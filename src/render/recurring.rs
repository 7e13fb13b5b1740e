// ============================================================================
// Recurring Decimals
// Cycle detection over the long-division remainders
// ============================================================================

use super::long_division::LongDivision;
use crate::numeric::Fraction;
use num_bigint::BigUint;
use std::collections::HashMap;
use std::fmt;

/// Decimal expansion split into its non-repeating and repeating digits.
///
/// `1/6` is integer `0`, non-repeating `"1"`, repeating `"6"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalExpansion {
    pub negative: bool,
    pub integer: BigUint,
    pub non_repeating: String,
    /// The cycle, or `None` when the expansion terminates
    pub repeating: Option<String>,
    /// The digit budget ran out before the expansion terminated or repeated
    pub truncated: bool,
}

impl DecimalExpansion {
    pub fn is_terminating(&self) -> bool {
        self.repeating.is_none() && !self.truncated
    }
}

/// Renders the cycle in parentheses: `-0.1(6)`, `0.(142857)`, `2.5`.
impl fmt::Display for DecimalExpansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}", self.integer)?;
        if self.non_repeating.is_empty() && self.repeating.is_none() && !self.truncated {
            return Ok(());
        }
        write!(f, ".{}", self.non_repeating)?;
        if let Some(cycle) = &self.repeating {
            write!(f, "({cycle})")?;
        }
        if self.truncated {
            f.write_str("...")?;
        }
        Ok(())
    }
}

impl Fraction {
    /// The repeating digits of the decimal expansion, or `None` if it
    /// terminates.
    ///
    /// A cycle is at most `denominator - 1` digits long, so this always
    /// finishes, but huge denominators make it slow; see
    /// [`Fraction::decimal_expansion`] for a bounded variant.
    pub fn recurring_decimal(&self) -> Option<String> {
        self.decimal_expansion(usize::MAX).repeating
    }

    /// Expand at most `max_digits` decimal digits, detecting a cycle by the
    /// first remainder seen twice.
    pub fn decimal_expansion(&self, max_digits: usize) -> DecimalExpansion {
        let (n, d) = self.magnitude();
        let (integer, mut division) = LongDivision::start(&n, &d);

        let mut seen: HashMap<BigUint, usize> = HashMap::new();
        let mut digits = String::new();
        let mut repeating = None;
        let mut truncated = false;

        while !division.is_exhausted() {
            if let Some(&start) = seen.get(division.remainder()) {
                repeating = Some(digits.split_off(start));
                break;
            }
            if digits.len() >= max_digits {
                tracing::trace!(max_digits, "decimal expansion budget exhausted");
                truncated = true;
                break;
            }
            seen.insert(division.remainder().clone(), digits.len());
            digits.push(char::from(b'0' + division.next_digit()));
        }

        DecimalExpansion {
            negative: self.is_negative(),
            integer,
            non_repeating: digits,
            repeating,
            truncated,
        }
    }
}
