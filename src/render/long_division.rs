// ============================================================================
// Long Division
// Digit-at-a-time decimal expansion of a non-negative ratio
// ============================================================================
//
// State: the running remainder. Each step multiplies it by ten and takes the
// quotient digit and new remainder against the divisor. The expansion
// terminates exactly when the remainder reaches zero; repeating expansions
// never do, so callers bound the number of steps they take.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

#[derive(Debug, Clone)]
pub struct LongDivision {
    remainder: BigUint,
    divisor: BigUint,
}

impl LongDivision {
    /// Split `dividend / divisor` into its integer part and the division
    /// state positioned just after the decimal point.
    ///
    /// `divisor` must be non-zero.
    pub fn start(dividend: &BigUint, divisor: &BigUint) -> (BigUint, Self) {
        debug_assert!(!divisor.is_zero());
        let (integer, remainder) = dividend.div_rem(divisor);
        (
            integer,
            Self {
                remainder,
                divisor: divisor.clone(),
            },
        )
    }

    #[inline]
    pub fn remainder(&self) -> &BigUint {
        &self.remainder
    }

    /// True once every further digit would be zero.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remainder.is_zero()
    }

    /// Produce the next decimal digit.
    pub fn next_digit(&mut self) -> u8 {
        let scaled = &self.remainder * 10u8;
        let (digit, remainder) = scaled.div_rem(&self.divisor);
        self.remainder = remainder;
        // remainder < divisor, so the quotient is a single digit
        digit.to_u8().unwrap_or(9)
    }
}

impl Iterator for LongDivision {
    type Item = u8;

    /// Yields digits until the expansion terminates; endless for repeating
    /// decimals.
    fn next(&mut self) -> Option<u8> {
        if self.is_exhausted() {
            None
        } else {
            Some(self.next_digit())
        }
    }
}
