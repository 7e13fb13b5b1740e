// ============================================================================
// Render Configuration
// Caller-level defaults for decimal rendering
// ============================================================================

use crate::numeric::{Fraction, NumericError, NumericResult};
use crate::render::{FormatOptions, RoundingMode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defaults resolved once by a caller and passed to the renderers, instead
/// of threading a rounding mode and precision through every call site.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderConfig {
    /// Rounding applied by every conversion
    pub rounding_mode: RoundingMode,

    /// Digits after the decimal point for fixed and exponential output
    pub decimal_places: u32,

    /// Digits kept by precision output (at least 1)
    pub significant_digits: u32,

    /// Keep zeros at the end of the decimal part
    pub trailing_zeros: bool,

    /// Separators and affixes for formatted output
    pub format: FormatOptions,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            rounding_mode: RoundingMode::RoundHalfUp,
            decimal_places: 18,
            significant_digits: 6,
            trailing_zeros: true,
            format: FormatOptions::default(),
        }
    }
}

impl RenderConfig {
    pub fn new(rounding_mode: RoundingMode, decimal_places: u32) -> Self {
        Self {
            rounding_mode,
            decimal_places,
            ..Self::default()
        }
    }

    /// Token amounts: truncate to the token's decimals, no padding zeros.
    pub fn token(decimals: u32) -> Self {
        Self::new(RoundingMode::RoundDown, decimals).with_trailing_zeros(false)
    }

    /// Money: two places, banker's rounding, thousands grouping.
    pub fn currency() -> Self {
        Self::new(RoundingMode::RoundHalfEven, 2)
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    /// Builder method: Set decimal places
    pub fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = places;
        self
    }

    /// Builder method: Set significant digits
    pub fn with_significant_digits(mut self, digits: u32) -> Self {
        self.significant_digits = digits;
        self
    }

    /// Builder method: Keep or drop trailing decimal zeros
    pub fn with_trailing_zeros(mut self, keep: bool) -> Self {
        self.trailing_zeros = keep;
        self
    }

    /// Builder method: Set format options
    pub fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns `InvalidArgument` for zero significant digits, an empty
    /// decimal separator, or a decimal separator equal to a group separator.
    pub fn validate(&self) -> NumericResult<()> {
        if self.significant_digits < 1 {
            return Err(NumericError::invalid_argument(
                "significant digits must be at least 1",
            ));
        }

        let format = &self.format;
        if format.decimal_separator.is_empty() {
            return Err(NumericError::invalid_argument(
                "decimal separator cannot be empty",
            ));
        }
        if format.group_size > 0 && format.group_separator == format.decimal_separator {
            return Err(NumericError::invalid_argument(
                "group separator must differ from the decimal separator",
            ));
        }
        if format.fraction_group_size > 0
            && format.fraction_group_separator == format.decimal_separator
        {
            return Err(NumericError::invalid_argument(
                "fraction group separator must differ from the decimal separator",
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Rendering With a Configuration
// ============================================================================

impl Fraction {
    pub fn to_fixed_with(&self, config: &RenderConfig) -> String {
        self.to_fixed(
            config.decimal_places,
            config.rounding_mode,
            config.trailing_zeros,
        )
    }

    /// # Errors
    /// Returns `InvalidArgument` if the configuration asks for zero
    /// significant digits.
    pub fn to_precision_with(&self, config: &RenderConfig) -> NumericResult<String> {
        self.to_precision(config.significant_digits, config.rounding_mode)
    }

    pub fn to_exponential_with(&self, config: &RenderConfig) -> String {
        self.to_exponential(
            config.decimal_places,
            config.rounding_mode,
            config.trailing_zeros,
        )
    }

    pub fn to_format_with(&self, config: &RenderConfig) -> String {
        config.format.apply(&self.to_fixed_with(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(s: &str) -> Fraction {
        Fraction::parse(s).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.rounding_mode, RoundingMode::RoundHalfUp);
        assert_eq!(config.decimal_places, 18);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RenderConfig::default()
            .with_rounding_mode(RoundingMode::RoundFloor)
            .with_decimal_places(4)
            .with_significant_digits(3)
            .with_trailing_zeros(false);
        assert_eq!(config.rounding_mode, RoundingMode::RoundFloor);
        assert_eq!(f("1.23456").to_fixed_with(&config), "1.2345");
        assert_eq!(f("1.5").to_fixed_with(&config), "1.5");
        assert_eq!(f("1.23456").to_precision_with(&config).unwrap(), "1.23");
        assert_eq!(f("12345").to_exponential_with(&config), "1.2345e+4");
    }

    #[test]
    fn test_token_preset() {
        let config = RenderConfig::token(6);
        assert_eq!(f("1.2345678").to_fixed_with(&config), "1.234567");
        assert_eq!(f("2").to_fixed_with(&config), "2");
    }

    #[test]
    fn test_currency_preset() {
        let config = RenderConfig::currency();
        assert_eq!(f("1234.565").to_format_with(&config), "1,234.56");
        assert_eq!(f("1234.575").to_format_with(&config), "1,234.58");
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let zero_digits = RenderConfig::default().with_significant_digits(0);
        assert!(zero_digits.validate().is_err());
        assert!(f("1").to_precision_with(&zero_digits).is_err());

        let clash = RenderConfig::default()
            .with_format(FormatOptions::default().with_decimal_separator(","));
        assert!(clash.validate().is_err());

        let empty = RenderConfig::default()
            .with_format(FormatOptions::default().with_decimal_separator(""));
        assert!(empty.validate().is_err());

        let european = RenderConfig::default().with_format(
            FormatOptions::default()
                .with_decimal_separator(",")
                .with_grouping(".", 3),
        );
        assert!(european.validate().is_ok());
    }
}
