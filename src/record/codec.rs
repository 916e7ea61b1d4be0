//! Positional record encoding and decoding

use std::collections::BTreeMap;

use crate::schema::{PropDef, Schema};
use crate::value::{parse_value, value_to_str, Value};

use super::errors::{RecordError, RecordResult};
use super::escape::{escape_field, split_fields, unescape_field, NULL_TOKEN};

/// One record exactly as persisted: caller-assigned id plus the raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObject {
    /// Record id, unique within its collection, assigned by the caller
    pub id: u64,
    /// The literal textual encoding of the record
    pub raw: String,
}

impl RawObject {
    /// Create a raw object from an id and its stored line
    pub fn new(id: u64, raw: impl Into<String>) -> Self {
        Self {
            id,
            raw: raw.into(),
        }
    }
}

/// One decoded record: id plus typed field values.
///
/// Absent fields are absent map entries; decoding normalizes the `\0`
/// placeholder to absence, so encode/decode fixpoints compare equal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataObject {
    /// Record id, unique within its collection
    pub id: u64,
    /// Present field values keyed by property name
    pub fields: BTreeMap<String, Value>,
}

impl DataObject {
    /// Create an empty record with the given id
    pub fn new(id: u64) -> Self {
        Self {
            id,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insertion
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Looks up a field value by property name
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Decodes a raw stored line into a structured object.
///
/// The line must yield exactly as many positional fields as the schema
/// declares properties, in the same order.
///
/// # Errors
///
/// Returns `RecordError::FieldCountMismatch` when the field count differs
/// from the schema arity (the primary corruption detector), or a value
/// error when a field fails coercion to its declared kind.
pub fn str_to_object(schema: &Schema, raw: &RawObject) -> RecordResult<DataObject> {
    if schema.props.is_empty() {
        if raw.raw.is_empty() {
            return Ok(DataObject::new(raw.id));
        }
        return Err(RecordError::FieldCountMismatch {
            expected: 0,
            actual: split_fields(&raw.raw).len(),
        });
    }

    let segments = split_fields(&raw.raw);
    if segments.len() != schema.arity() {
        return Err(RecordError::FieldCountMismatch {
            expected: schema.arity(),
            actual: segments.len(),
        });
    }

    let mut obj = DataObject::new(raw.id);
    for (prop, segment) in schema.props.iter().zip(segments) {
        if segment == NULL_TOKEN {
            continue;
        }
        let text = unescape_field(&segment)?;
        let value = parse_value(prop.data_type, &text)?;
        obj.fields.insert(prop.name.clone(), value);
    }

    Ok(obj)
}

/// Encodes an object's fields as one record line.
///
/// Properties are emitted in schema-declared order. Fields missing from
/// the object (or explicitly null) encode as the placeholder token, never
/// omitted, so positional alignment is preserved. Fields the schema does
/// not declare are ignored; positional encoding cannot carry them.
///
/// # Errors
///
/// Returns a value error when a field value does not inhabit its declared
/// kind.
pub fn obj_to_str(props: &[PropDef], fields: &BTreeMap<String, Value>) -> RecordResult<String> {
    let mut segments = Vec::with_capacity(props.len());
    for prop in props {
        match fields.get(&prop.name) {
            None | Some(Value::Null) => segments.push(NULL_TOKEN.to_string()),
            Some(value) => {
                let text = value_to_str(prop.data_type, value)?;
                segments.push(escape_field(&text));
            }
        }
    }
    Ok(segments.join(","))
}

/// Encodes every object in `data` as a record line terminated by `\n`,
/// concatenated in input order.
pub fn stringify(schema: &Schema, data: &[DataObject]) -> RecordResult<String> {
    let mut out = String::new();
    for obj in data {
        out.push_str(&obj_to_str(&schema.props, &obj.fields)?);
        out.push('\n');
    }
    Ok(out)
}
