//! Error types for wide string conversion

use thiserror::Error;

/// The error type for wide-to-UTF-8 conversion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A null buffer pointer was passed where a NUL-terminated buffer was expected
    #[error("Null wide string pointer")]
    NullInput,

    /// Ill-formed UTF-16 (unpaired surrogate) under the strict policy
    #[error("Unpaired surrogate {unit:#06X} at index {index}")]
    Encoding { index: usize, unit: u16 },

    /// Policy name that does not match any known policy
    #[error("Unknown malformed-input policy: {name}")]
    UnknownPolicy { name: String },
}

impl ConvertError {
    /// Whether this error was caused by the input data rather than the call contract.
    pub fn is_encoding(&self) -> bool {
        matches!(self, ConvertError::Encoding { .. })
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
