//! Schema compiler subsystem for linedb
//!
//! A schema line names a collection and declares its properties in order.
//! Declaration order is the positional contract the record codec encodes
//! against, so it is preserved exactly as read.
//!
//! # Design Principles
//!
//! - Strict parsing; a malformed declaration names the token and position
//! - Property names are unique within a schema
//! - Compiled once per collection open, held immutable for the session
//! - `schemify` and `Schema::to_line` are mutual inverses

mod errors;
mod parser;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use parser::schemify;
pub use types::{PropDef, Schema};
