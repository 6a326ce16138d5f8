// ============================================================================
// Quantity Errors
// Error types for storage-quantity operations
// ============================================================================

use crate::units::UnitKind;
use std::fmt;

/// Errors that can occur during storage-quantity operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// Quantity operand of a different kind in an arithmetic or comparison
    /// operation; cross-kind operands are never auto-converted
    TypeMismatch {
        expected: UnitKind,
        found: UnitKind,
    },
    /// Unit string matched neither a long unit name nor a short symbol
    InvalidUnit(String),
    /// Attempted division by zero
    DivisionByZero,
    /// Construction value is not a finite number
    InvalidArgument,
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityError::TypeMismatch { expected, found } => write!(
                f,
                "type mismatch: expected a number or {} quantity, found {}",
                expected, found
            ),
            QuantityError::InvalidUnit(unit) => {
                let valid = UnitKind::ALL.map(|k| k.symbol().to_ascii_lowercase());
                write!(
                    f,
                    "invalid unit specified ({}): select a valid unit: {}",
                    unit,
                    valid.join(", ")
                )
            }
            QuantityError::DivisionByZero => write!(f, "division by zero"),
            QuantityError::InvalidArgument => {
                write!(f, "invalid argument: value must be a finite number")
            }
        }
    }
}

impl std::error::Error for QuantityError {}

/// Result type alias for quantity operations
pub type QuantityResult<T> = Result<T, QuantityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            QuantityError::DivisionByZero.to_string(),
            "division by zero"
        );
        assert_eq!(
            QuantityError::TypeMismatch {
                expected: UnitKind::Kilobyte,
                found: UnitKind::Megabyte,
            }
            .to_string(),
            "type mismatch: expected a number or kilobyte quantity, found megabyte"
        );
    }

    #[test]
    fn test_invalid_unit_message_lists_symbols() {
        let msg = QuantityError::InvalidUnit("bogus".to_string()).to_string();
        assert_eq!(
            msg,
            "invalid unit specified (bogus): select a valid unit: \
             b, kb, mb, gb, tb, pb, eb, zb, yb"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(QuantityError::DivisionByZero, QuantityError::DivisionByZero);
        assert_ne!(
            QuantityError::DivisionByZero,
            QuantityError::InvalidArgument
        );
    }
}
