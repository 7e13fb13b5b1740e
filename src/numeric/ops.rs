// ============================================================================
// Operator Traits
// Infallible std operators between fractions
// ============================================================================
//
// Only the operators that cannot fail are provided. Division can hit a zero
// divisor, so it stays behind `Fraction::checked_div`.

use super::fraction::Fraction;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $inner:ident) => {
        impl $trait<&Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Fraction {
                self.$inner(rhs)
            }
        }

        impl $trait<Fraction> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                self.$inner(&rhs)
            }
        }

        impl $trait<&Fraction> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Fraction {
                self.$inner(rhs)
            }
        }

        impl $trait<Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                self.$inner(&rhs)
            }
        }

        impl $assign_trait<&Fraction> for Fraction {
            fn $assign_method(&mut self, rhs: &Fraction) {
                *self = self.$inner(rhs);
            }
        }

        impl $assign_trait<Fraction> for Fraction {
            fn $assign_method(&mut self, rhs: Fraction) {
                *self = self.$inner(&rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, add_fraction);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, sub_fraction);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, mul_fraction);

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::zero(), |acc, x| acc + x)
    }
}

impl Product for Fraction {
    fn product<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Fraction> for Fraction {
    fn product<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::one(), |acc, x| acc * x)
    }
}
