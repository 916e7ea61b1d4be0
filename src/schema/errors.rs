//! Schema compilation error types

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema line compilation errors.
///
/// Positions are 1-based property declaration indexes, counted left to
/// right across the schema line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Line has no `::` between collection name and declarations
    #[error("schema line is missing the '::' name separator")]
    MissingSeparator,

    /// Collection name is empty or not an identifier
    #[error("invalid collection name {name:?}")]
    InvalidName {
        /// The offending name token
        name: String,
    },

    /// Declaration is not of the form `name:type`
    #[error("malformed property declaration {token:?} at position {position}")]
    Malformed {
        /// The offending declaration token
        token: String,
        /// 1-based declaration position
        position: usize,
    },

    /// Property name declared more than once
    #[error("duplicate property {name:?} at position {position}")]
    DuplicateProp {
        /// The repeated property name
        name: String,
        /// 1-based declaration position of the repeat
        position: usize,
    },

    /// Type token is not one of the supported primitive kinds
    #[error("unsupported type {token:?} at position {position}")]
    UnsupportedType {
        /// The offending type token
        token: String,
        /// 1-based declaration position
        position: usize,
    },
}
