//! Log error types

use thiserror::Error;

use crate::record::RecordError;
use crate::value::ValueError;

/// Result type for log operations
pub type LogResult<T> = Result<T, LogError>;

/// Log writer and reader errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LogError {
    /// Caller supplied more than one of input, update, remove
    #[error("action sets more than one of input, update, remove")]
    AmbiguousAction,

    /// Caller supplied none of input, update, remove
    #[error("action sets none of input, update, remove")]
    EmptyAction,

    /// Update names a property the schema does not declare.
    ///
    /// Such a pair could never replay, so it is rejected at write time.
    #[error("property {0:?} is not declared in the schema")]
    UnknownProp(String),

    /// Log line cannot be decoded
    #[error("malformed log line {line:?}: {reason}")]
    Malformed {
        /// The offending line
        line: String,
        /// What failed to decode
        reason: String,
    },

    /// Payload record failed the record codec
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Payload value failed coercion
    #[error(transparent)]
    Value(#[from] ValueError),
}

impl LogError {
    /// Create a malformed-line error
    pub fn malformed(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line: line.into(),
            reason: reason.into(),
        }
    }
}
