//! Validation errors for hex string construction

use thiserror::Error;

/// Error raised when a string fails hex validation
///
/// Validation is atomic over the whole input: the first structural
/// violation (or a length mismatch) rejects the value, and the rejected
/// input is carried for diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A character outside `[0-9a-fA-F]` was found
    #[error("invalid hex digits in {0:?}")]
    InvalidDigits(String),

    /// The string does not start with the literal "0x"
    #[error("missing 0x prefix in {0:?}")]
    MissingPrefix(String),

    /// The digit count does not match the declared byte length
    #[error("expected {expected_bytes} byte(s), got {got_digits} hex digit(s) in {value:?}")]
    LengthMismatch {
        /// The rejected input
        value: String,
        /// Declared byte length (two hex digits per byte)
        expected_bytes: usize,
        /// Hex digits actually present, not counting any prefix
        got_digits: usize,
    },
}
