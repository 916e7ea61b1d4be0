//! Facade error types

use thiserror::Error;

use crate::record::RecordError;
use crate::schema::SchemaError;

/// Result type for facade-level parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors from parsing a full persisted line sequence
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// No lines supplied; a collection is at least a schema header
    #[error("cannot parse an empty line sequence")]
    EmptyInput,

    /// Header line failed schema compilation
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A record line failed the codec
    #[error(transparent)]
    Record(#[from] RecordError),
}
