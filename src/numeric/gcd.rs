// ============================================================================
// Greatest Common Divisor
// Euclidean reduction over signed arbitrary-precision integers
// ============================================================================

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Greatest common divisor of two signed integers.
///
/// Total over all pairs: the result is never negative, `gcd(a, 0) == |a|`
/// and `gcd(0, 0) == 0`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}
