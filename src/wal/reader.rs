//! Append-only log line decoding

use crate::record::{split_fields, str_to_object, unescape_field, RawObject, NULL_TOKEN};
use crate::schema::Schema;
use crate::value::{parse_value, Value};

use super::errors::{LogError, LogResult};
use super::record::{ActionKind, LogEntry, UpdateValues};

/// Decodes one log line back into a typed entry, the inverse of
/// `convert_to_log`.
///
/// # Errors
///
/// Returns `LogError::Malformed` on an unknown action kind, a bad id, or a
/// truncated line, and propagates codec failures from the payload.
pub fn parse_log_line(schema: &Schema, line: &str) -> LogResult<LogEntry> {
    let segments = split_fields(line);
    if segments.len() < 2 {
        return Err(LogError::malformed(line, "missing action kind or id"));
    }

    let kind = ActionKind::from_token(&segments[0])
        .ok_or_else(|| LogError::malformed(line, format!("unknown action kind {:?}", segments[0])))?;

    let id: u64 = segments[1]
        .parse()
        .map_err(|_| LogError::malformed(line, format!("invalid id {:?}", segments[1])))?;

    match kind {
        ActionKind::Insert => {
            if segments.len() < 3 {
                return Err(LogError::malformed(line, "insert without record payload"));
            }
            // Re-joining the escaped segments reconstructs the record body
            let raw = segments[2..].join(",");
            let obj = str_to_object(schema, &RawObject::new(id, raw))?;
            Ok(LogEntry::Insert(obj))
        }
        ActionKind::Update => {
            if segments.len() < 3 {
                return Err(LogError::malformed(line, "update without field pairs"));
            }
            let mut update = UpdateValues::new(id);
            for segment in &segments[2..] {
                let (name, encoded) = segment
                    .split_once(':')
                    .ok_or_else(|| LogError::malformed(line, format!("pair {:?} has no ':'", segment)))?;
                let prop = schema
                    .prop(name)
                    .ok_or_else(|| LogError::UnknownProp(name.to_string()))?;
                let value = if encoded == NULL_TOKEN {
                    Value::Null
                } else {
                    parse_value(prop.data_type, &unescape_field(encoded)?)?
                };
                update.fields.insert(name.to_string(), value);
            }
            Ok(LogEntry::Update(update))
        }
        ActionKind::Remove => {
            if segments.len() != 2 {
                return Err(LogError::malformed(line, "remove carries a payload"));
            }
            Ok(LogEntry::Remove(id))
        }
    }
}
