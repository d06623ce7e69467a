// ============================================================================
// Function Errors
// Error types for the numeric operation façade
// ============================================================================

use crate::value::Kind;
use std::fmt;

/// Errors raised by the numeric operations.
///
/// Every error is fatal and surfaces synchronously to the caller; the
/// operations are deterministic, so retrying cannot change the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionError {
    /// An operand's kind does not match the operation's signature.
    /// Raised before any computation.
    TypeMismatch { expected: Kind, actual: Kind },
    /// The operands are outside the operation's domain: division or modulo
    /// by zero, an invalid log domain, an invalid parse base, or an invalid
    /// exponentiation.
    Domain(String),
    /// The result fell outside the representable decimal range.
    Overflow,
}

impl FunctionError {
    pub(crate) fn domain(message: impl Into<String>) -> Self {
        FunctionError::Domain(message.into())
    }
}

impl fmt::Display for FunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionError::TypeMismatch { expected, actual } => {
                write!(f, "type mismatch: expected {} operand, got {}", expected, actual)
            }
            FunctionError::Domain(message) => write!(f, "{}", message),
            FunctionError::Overflow => {
                write!(f, "arithmetic overflow: result outside the representable decimal range")
            }
        }
    }
}

impl std::error::Error for FunctionError {}

/// Result type alias for the numeric operations
pub type FunctionResult<T> = Result<T, FunctionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let mismatch = FunctionError::TypeMismatch {
            expected: Kind::Number,
            actual: Kind::String,
        };
        assert_eq!(
            mismatch.to_string(),
            "type mismatch: expected number operand, got string"
        );

        let domain = FunctionError::domain("attempted to divide by zero");
        assert_eq!(domain.to_string(), "attempted to divide by zero");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(FunctionError::Overflow, FunctionError::Overflow);
        assert_ne!(
            FunctionError::Overflow,
            FunctionError::domain("attempted to modulo by zero")
        );
    }
}
