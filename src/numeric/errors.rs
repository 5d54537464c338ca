// ============================================================================
// Digital Errors
// Error types for run-time parsing and decimal conversion of quantities
// ============================================================================

use crate::literal::LiteralError;
use std::fmt;

/// Errors raised by the fallible, run-time side of the crate.
///
/// Literal and scale mistakes are rejected at compile time; these variants
/// cover text parsing (`FromStr`) and the decimal bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitalError {
    /// Digit sequence could not be read
    InvalidLiteral(LiteralError),
    /// Value does not fit in the representation type
    OutOfRange,
    /// Unit symbol names a different scale than the target type
    UnitMismatch,
    /// Unit symbol is not part of the catalog
    UnknownUnit,
    /// Intermediate decimal arithmetic overflowed
    Overflow,
    /// Integral representation cannot hold a fractional count
    PrecisionLoss,
}

impl fmt::Display for DigitalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitalError::InvalidLiteral(err) => write!(f, "invalid literal: {}", err),
            DigitalError::OutOfRange => {
                write!(f, "value is out of range of the quantity's representation type")
            },
            DigitalError::UnitMismatch => write!(f, "unit does not match the quantity's scale"),
            DigitalError::UnknownUnit => write!(f, "unknown unit symbol"),
            DigitalError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            DigitalError::PrecisionLoss => write!(
                f,
                "precision loss: value is not a whole number of units"
            ),
        }
    }
}

impl std::error::Error for DigitalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DigitalError::InvalidLiteral(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LiteralError> for DigitalError {
    fn from(err: LiteralError) -> Self {
        match err {
            LiteralError::OutOfRange => DigitalError::OutOfRange,
            other => DigitalError::InvalidLiteral(other),
        }
    }
}

/// Result type alias for fallible quantity operations
pub type DigitalResult<T> = Result<T, DigitalError>;
