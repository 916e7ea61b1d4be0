//! Record codec error types

use thiserror::Error;

use crate::value::ValueError;

/// Result type for record codec operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Record codec errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// Record line field count differs from schema arity.
    ///
    /// Signals storage corruption or schema drift; the caller decides
    /// whether to skip, quarantine, or abort.
    #[error("record has {actual} fields, schema declares {expected}")]
    FieldCountMismatch {
        /// Field count the schema declares
        expected: usize,
        /// Field count the line actually yielded
        actual: usize,
    },

    /// Field text contains a backslash sequence outside the escape set
    #[error("invalid escape sequence in field {text:?}")]
    InvalidEscape {
        /// The offending field text, still escaped
        text: String,
    },

    /// Field text failed coercion to its declared kind
    #[error(transparent)]
    Value(#[from] ValueError),
}
