//! Record codec subsystem for linedb
//!
//! Converts one raw stored line into a structured object and back, using a
//! compiled schema and the value coercion layer. Field position in the
//! line follows schema declaration order; a line whose field count differs
//! from the schema arity is rejected outright, never padded or truncated.
//!
//! # Wire Format
//!
//! - Fields join with `,`; records terminate with `\n`
//! - Inside a field: `\\` escapes a backslash, `\,` a comma, `\n` a newline
//! - The two-byte token `\0` is the absent-field placeholder; a literal
//!   backslash always encodes doubled, so the placeholder cannot collide
//!   with any encoded value

mod codec;
mod errors;
mod escape;

pub use codec::{obj_to_str, str_to_object, stringify, DataObject, RawObject};
pub use errors::{RecordError, RecordResult};
pub use escape::{escape_field, split_fields, unescape_field, FIELD_SEPARATOR, NULL_TOKEN};
