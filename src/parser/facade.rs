//! The public parser surface

use std::collections::BTreeMap;

use crate::record::{self, DataObject, RawObject, RecordResult};
use crate::schema::{self, PropDef, Schema, SchemaResult};
use crate::snapshot;
use crate::value::{self, DataType, Value, ValueResult};
use crate::wal::{self, ActionValues, CollectionState, LogEntry, LogResult};

use super::errors::{ParseError, ParseResult};

/// A fully parsed collection: compiled schema plus decoded records.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    /// Compiled schema from the header line
    pub schema: Schema,
    /// Decoded records in stored order
    pub data: Vec<DataObject>,
}

/// Stateless facade over the codec subsystems.
///
/// Every method is a deterministic, side-effect-free transformation of its
/// arguments; the struct carries no state and is safe to share across
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    /// Create a parser
    pub fn new() -> Self {
        Self
    }

    /// Parses a full persisted line sequence, the inverse of
    /// [`Parser::convert_to_save`].
    ///
    /// Line 0 compiles to the schema; every following line decodes to one
    /// record. Record lines carry no ids, so ids are assigned sequentially
    /// from 0 in stored order; the surrounding store's id-allocation
    /// source owns real ids.
    pub fn parse(&self, lines: &[String]) -> ParseResult<Collection> {
        let (header, records) = lines.split_first().ok_or(ParseError::EmptyInput)?;
        let schema = schema::schemify(header)?;

        let mut data = Vec::with_capacity(records.len());
        for (index, line) in records.iter().enumerate() {
            let raw = RawObject::new(index as u64, line.clone());
            data.push(record::str_to_object(&schema, &raw)?);
        }

        Ok(Collection { schema, data })
    }

    /// Compiles a schema line. See [`schema::schemify`].
    pub fn schemify(&self, line: &str) -> SchemaResult<Schema> {
        schema::schemify(line)
    }

    /// Canonical schema line, the inverse of [`Parser::schemify`].
    pub fn schema_to_line(&self, schema: &Schema) -> String {
        schema.to_line()
    }

    /// Decodes one raw stored line. See [`record::str_to_object`].
    pub fn str_to_object(&self, schema: &Schema, raw: &RawObject) -> RecordResult<DataObject> {
        record::str_to_object(schema, raw)
    }

    /// Encodes an object as one record line. See [`record::obj_to_str`].
    pub fn obj_to_str(
        &self,
        props: &[PropDef],
        fields: &BTreeMap<String, Value>,
    ) -> RecordResult<String> {
        record::obj_to_str(props, fields)
    }

    /// Encodes a dataset as newline-terminated record lines. See
    /// [`record::stringify`].
    pub fn stringify(&self, schema: &Schema, data: &[DataObject]) -> RecordResult<String> {
        record::stringify(schema, data)
    }

    /// Serializes a whole collection for a rewrite. See
    /// [`snapshot::convert_to_save`].
    pub fn convert_to_save(&self, schema: &Schema, data: &[DataObject]) -> RecordResult<Vec<String>> {
        snapshot::convert_to_save(schema, data)
    }

    /// Serializes one mutation event to log lines. See
    /// [`wal::convert_to_log`].
    pub fn convert_to_log(&self, schema: &Schema, actions: &ActionValues) -> LogResult<Vec<String>> {
        wal::convert_to_log(schema, actions)
    }

    /// Decodes one log line. See [`wal::parse_log_line`].
    pub fn parse_log_line(&self, schema: &Schema, line: &str) -> LogResult<LogEntry> {
        wal::parse_log_line(schema, line)
    }

    /// Replays log lines over a seed state. See [`wal::replay`].
    pub fn replay(
        &self,
        schema: &Schema,
        lines: &[String],
        seed: CollectionState,
    ) -> LogResult<CollectionState> {
        wal::replay(schema, lines, seed)
    }

    /// Coerces field text to a typed value. See [`value::parse_value`].
    pub fn parse_value(&self, data_type: DataType, text: &str) -> ValueResult<Value> {
        value::parse_value(data_type, text)
    }

    /// Encodes a typed value as field text. See [`value::value_to_str`].
    pub fn value_to_str(&self, data_type: DataType, val: &Value) -> ValueResult<String> {
        value::value_to_str(data_type, val)
    }
}
