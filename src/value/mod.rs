//! Value coercion subsystem for linedb
//!
//! Converts a single textual field to and from its typed in-memory
//! representation according to a declared primitive kind.
//!
//! # Design Principles
//!
//! - Closed type enumeration; exhaustive matching, no dynamic dispatch
//! - Malformed text fails loudly with the offending text and expected kind
//! - No silent defaults, no implicit coercion between kinds
//! - Encoding and decoding are mutual inverses

mod coerce;
mod errors;
mod types;

pub use coerce::{parse_value, value_to_str};
pub use errors::{ValueError, ValueResult};
pub use types::{DataType, Value};
