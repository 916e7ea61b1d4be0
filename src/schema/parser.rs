//! Schema line parsing
//!
//! Grammar: `<name>::<prop>:<type>(,<prop>:<type>)*`. Identifiers are
//! ASCII alphanumerics plus `_` and `-`, and may not start with a digit.

use std::collections::HashSet;

use crate::value::DataType;

use super::errors::{SchemaError, SchemaResult};
use super::types::{PropDef, Schema};

/// Compiles a schema line into a `Schema`.
///
/// Declaration order is preserved exactly as read; it is the positional
/// contract for record lines.
///
/// # Errors
///
/// Returns a `SchemaError` naming the offending token and its 1-based
/// position when the line is missing the `::` separator, the collection
/// name is invalid, a declaration is not `name:type`, a property name
/// repeats, or a type token is not a supported primitive kind.
pub fn schemify(line: &str) -> SchemaResult<Schema> {
    let (name, decls) = line
        .split_once("::")
        .ok_or(SchemaError::MissingSeparator)?;

    if !is_identifier(name) {
        return Err(SchemaError::InvalidName { name: name.into() });
    }

    let mut props = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    if !decls.is_empty() {
        for (index, decl) in decls.split(',').enumerate() {
            let position = index + 1;

            let (prop_name, type_token) =
                decl.split_once(':').ok_or_else(|| SchemaError::Malformed {
                    token: decl.into(),
                    position,
                })?;

            if !is_identifier(prop_name) {
                return Err(SchemaError::Malformed {
                    token: decl.into(),
                    position,
                });
            }

            if !seen.insert(prop_name) {
                return Err(SchemaError::DuplicateProp {
                    name: prop_name.into(),
                    position,
                });
            }

            let data_type =
                DataType::from_token(type_token).ok_or_else(|| SchemaError::UnsupportedType {
                    token: type_token.into(),
                    position,
                })?;

            props.push(PropDef::new(prop_name, data_type));
        }
    }

    Ok(Schema::new(name, props))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '-' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
