//! Snapshot line production

use crate::record::{obj_to_str, DataObject, RecordResult};
use crate::schema::Schema;

/// Serializes an entire collection into its persisted line sequence.
///
/// Line 0 is the schema's canonical textual form; each following line is
/// one record in input order. Record lines carry no ids; ids belong to
/// the caller's id-allocation source, and the log format is where they
/// appear explicitly.
///
/// # Errors
///
/// Propagates record encoding failures; on error nothing partial is
/// returned.
pub fn convert_to_save(schema: &Schema, data: &[DataObject]) -> RecordResult<Vec<String>> {
    let mut lines = Vec::with_capacity(data.len() + 1);
    lines.push(schema.to_line());
    for obj in data {
        lines.push(obj_to_str(&schema.props, &obj.fields)?);
    }
    Ok(lines)
}
