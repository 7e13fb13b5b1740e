// ============================================================================
// Units
// Tags attached to a fraction by the measure wrapper
// ============================================================================

use crate::numeric::Fraction;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a [`Measure`](super::Measure) is measured in.
///
/// Two measures can only be added or compared when their units are equal.
pub trait Unit: Clone + PartialEq + fmt::Debug {
    /// Label used in rendered output and error messages
    fn symbol(&self) -> &str;

    /// Decimal places used when rendering a value in this unit
    fn decimals(&self) -> u32;

    /// Factor applied to the stored value before rendering
    fn display_factor(&self) -> Fraction {
        Fraction::one()
    }

    /// Attach the symbol to an already rendered number.
    fn decorate(&self, rendered: &str) -> String {
        format!("{rendered} {}", self.symbol())
    }
}

/// A currency or token with a fixed number of decimals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Asset {
    pub symbol: String,
    pub decimals: u32,
}

impl Asset {
    pub fn new(symbol: impl Into<String>, decimals: u32) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
        }
    }
}

impl Unit for Asset {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn decimals(&self) -> u32 {
        self.decimals
    }
}

/// Ratios rendered as percentages: `0.125` shows as `12.50%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Percent;

impl Unit for Percent {
    fn symbol(&self) -> &str {
        "%"
    }

    fn decimals(&self) -> u32 {
        2
    }

    fn display_factor(&self) -> Fraction {
        Fraction::from_integer(100)
    }

    fn decorate(&self, rendered: &str) -> String {
        format!("{rendered}%")
    }
}
