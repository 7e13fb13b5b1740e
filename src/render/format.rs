// ============================================================================
// Formatted Output
// Grouping, separators and affixes around fixed-point rendering
// ============================================================================

use super::rounding::RoundingMode;
use crate::numeric::Fraction;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Presentation options for [`Fraction::to_format`].
///
/// Group sizes of zero disable grouping. The sign is placed before the
/// prefix, so a currency prefix renders as `-$1,000.00`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    pub decimal_separator: String,
    /// Separator between groups of the integer part
    pub group_separator: String,
    pub group_size: usize,
    /// Separator between groups of the decimal part, counted from the point
    pub fraction_group_separator: String,
    pub fraction_group_size: usize,
    pub prefix: String,
    pub suffix: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            group_size: 3,
            fraction_group_separator: " ".to_string(),
            fraction_group_size: 0,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl FormatOptions {
    /// No grouping, `.` as decimal separator: plain `to_fixed` output.
    pub fn plain() -> Self {
        Self {
            group_size: 0,
            ..Self::default()
        }
    }

    /// Builder method: Set decimal separator
    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    /// Builder method: Set integer grouping
    pub fn with_grouping(mut self, separator: impl Into<String>, size: usize) -> Self {
        self.group_separator = separator.into();
        self.group_size = size;
        self
    }

    /// Builder method: Set decimal grouping
    pub fn with_fraction_grouping(mut self, separator: impl Into<String>, size: usize) -> Self {
        self.fraction_group_separator = separator.into();
        self.fraction_group_size = size;
        self
    }

    /// Builder method: Set literal prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Builder method: Set literal suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Apply the options to a plain rendering such as `"-1234.5678"`.
    pub fn apply(&self, rendered: &str) -> String {
        let (sign, unsigned) = match rendered.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", rendered),
        };
        let (integer, decimals) = match unsigned.split_once('.') {
            Some((integer, decimals)) => (integer, Some(decimals)),
            None => (unsigned, None),
        };

        let mut out = String::with_capacity(rendered.len() + self.prefix.len() + self.suffix.len());
        out.push_str(sign);
        out.push_str(&self.prefix);
        out.push_str(&group_from_right(integer, &self.group_separator, self.group_size));
        if let Some(decimals) = decimals {
            out.push_str(&self.decimal_separator);
            out.push_str(&group_from_left(
                decimals,
                &self.fraction_group_separator,
                self.fraction_group_size,
            ));
        }
        out.push_str(&self.suffix);
        out
    }
}

fn group_from_right(digits: &str, separator: &str, size: usize) -> String {
    if size == 0 || separator.is_empty() || digits.len() <= size {
        return digits.to_string();
    }
    let head = digits.len() % size;
    let mut out = String::with_capacity(digits.len() + separator.len() * (digits.len() / size));
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + size - head) % size == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

fn group_from_left(digits: &str, separator: &str, size: usize) -> String {
    if size == 0 || separator.is_empty() || digits.len() <= size {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + separator.len() * (digits.len() / size));
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % size == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

impl Fraction {
    /// [`Fraction::to_fixed`] with separators, grouping and affixes applied.
    ///
    /// # Example
    /// ```
    /// use bigfraction::numeric::Fraction;
    /// use bigfraction::render::{FormatOptions, RoundingMode};
    ///
    /// let x = Fraction::parse("-1234567.891")?;
    /// let options = FormatOptions::default().with_prefix("$");
    /// assert_eq!(x.to_format(2, RoundingMode::RoundHalfUp, &options), "-$1,234,567.89");
    /// # Ok::<(), bigfraction::numeric::NumericError>(())
    /// ```
    pub fn to_format(&self, decimal_places: u32, mode: RoundingMode, options: &FormatOptions) -> String {
        options.apply(&self.to_fixed(decimal_places, mode, true))
    }
}
