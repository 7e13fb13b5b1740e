// ============================================================================
// Numeric Errors
// Error types for exact rational arithmetic and decimal rendering
// ============================================================================

use thiserror::Error;

/// Errors that can occur while parsing, combining or rendering fractions.
///
/// All variants are deterministic: the same inputs always fail the same way,
/// so none of them is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Input is not a valid signed decimal literal
    #[error("invalid numeric literal: {input:?}")]
    Parse { input: String },

    /// Zero denominator, inverting zero, or dividing by zero
    #[error("division by zero")]
    DivisionByZero,

    /// Rendering or configuration argument out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two measures with different units were combined
    #[error("unit mismatch: expected {expected}, found {found}")]
    UnitMismatch { expected: String, found: String },

    /// Value does not fit the bounded target representation
    #[error("arithmetic overflow: value does not fit the target type")]
    Overflow,
}

impl NumericError {
    pub(crate) fn parse(input: impl Into<String>) -> Self {
        NumericError::Parse {
            input: input.into(),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        NumericError::InvalidArgument(message.into())
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
