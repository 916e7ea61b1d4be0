//! Value coercion error types

use thiserror::Error;

use super::types::DataType;

/// Result type for value coercion operations
pub type ValueResult<T> = Result<T, ValueError>;

/// Value coercion errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// Text cannot be coerced to the declared kind
    #[error("cannot decode {text:?} as {expected}")]
    Decode {
        /// The offending field text
        text: String,
        /// The kind the schema declares for this field
        expected: DataType,
    },

    /// In-memory value does not inhabit the declared kind
    #[error("expected a {expected} value, got {actual}")]
    TypeMismatch {
        /// The kind the schema declares for this field
        expected: DataType,
        /// Kind name of the value actually supplied
        actual: &'static str,
    },
}

impl ValueError {
    /// Create a decode error for the given text and expected kind
    pub fn decode(text: impl Into<String>, expected: DataType) -> Self {
        Self::Decode {
            text: text.into(),
            expected,
        }
    }
}
