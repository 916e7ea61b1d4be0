//! Value type definitions
//!
//! Supported primitive kinds:
//! - string: UTF-8 string
//! - number: 64-bit signed integer or 64-bit float, picked by lexical form
//! - boolean
//! - date: UTC instant, RFC 3339 on the wire
//! - array: JSON-encoded list
//! - object: JSON-encoded map with sorted keys

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Declared primitive kind of a schema property.
///
/// The enumeration is closed: a schema line declaring any other type token
/// is rejected at compile time (`schemify`), so coercion never sees an
/// unsupported kind at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// UTF-8 string
    String,
    /// Integer or float, one storage kind
    Number,
    /// Boolean
    Boolean,
    /// UTC timestamp
    Date,
    /// List of JSON-representable values
    Array,
    /// Map of JSON-representable values
    Object,
}

impl DataType {
    /// Returns the schema-line token for this kind
    pub fn type_name(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::Date => "date",
            DataType::Array => "array",
            DataType::Object => "object",
        }
    }

    /// Parses a schema-line type token, returning None for unknown tokens
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "string" => Some(DataType::String),
            "number" => Some(DataType::Number),
            "boolean" => Some(DataType::Boolean),
            "date" => Some(DataType::Date),
            "array" => Some(DataType::Array),
            "object" => Some(DataType::Object),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// A typed in-memory field value.
///
/// `Null` is the in-memory form of the absent-field placeholder; the record
/// codec never hands it to coercion. `Object` keys are kept sorted so
/// re-encoding is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent field
    Null,
    /// UTF-8 string
    String(String),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// Boolean
    Boolean(bool),
    /// UTC instant
    Date(DateTime<Utc>),
    /// List of values
    Array(Vec<Value>),
    /// Sorted map of values
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the kind name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::String(_) => "string",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::Date(_) => "date",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Returns true if this is the absent-field marker
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the string content if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content if this is an int value
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Maps a JSON value structurally onto a typed value.
    ///
    /// Exact integers become `Int`, all other numbers `Float`. Object keys
    /// are collected into a sorted map.
    pub(crate) fn from_json(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    // u64 beyond i64::MAX and true floats both land here
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Maps this value onto JSON.
    ///
    /// Dates travel as RFC 3339 strings; non-finite floats as their decimal
    /// spellings, since JSON has no representation for them.
    pub(crate) fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or_else(|| serde_json::Value::String(f.to_string())),
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Date(dt) => {
                serde_json::Value::String(dt.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true))
            }
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::Date(dt)
    }
}
