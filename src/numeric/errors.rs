// ============================================================================
// Numeric Errors
// Error types for fixed-point decimal operations
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing or combining decimal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// A negative number of decimal digits was requested
    InvalidScale,
    /// Attempted division by zero
    DivisionByZero,
    /// Magnitude exceeds the representable range (integer-scaled backend only)
    Overflow,
    /// Input text is not a valid decimal number
    ParseError,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidScale => {
                write!(f, "decimal digit count must not be negative")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: magnitude exceeds representable range")
            },
            NumericError::ParseError => {
                write!(f, "invalid input: could not parse decimal value")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
