//! Coercion between field text and typed values
//!
//! `parse_value` and `value_to_str` are mutual inverses: for every kind T
//! and value v inhabiting T, `parse_value(T, &value_to_str(T, &v)?)? == v`
//! (float NaN aside). The text handled here is the unescaped field content;
//! the record codec owns separator escaping one layer up.

use chrono::{DateTime, SecondsFormat, Utc};

use super::errors::{ValueError, ValueResult};
use super::types::{DataType, Value};

/// Coerces field text to a typed value according to the declared kind.
///
/// # Errors
///
/// Returns `ValueError::Decode` with the offending text and expected kind
/// when the text is not a valid encoding of that kind. Nothing is ever
/// silently coerced to a default.
pub fn parse_value(data_type: DataType, text: &str) -> ValueResult<Value> {
    match data_type {
        DataType::String => Ok(Value::String(text.to_string())),
        DataType::Number => parse_number(text),
        DataType::Boolean => match text {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            _ => Err(ValueError::decode(text, DataType::Boolean)),
        },
        DataType::Date => DateTime::parse_from_rfc3339(text)
            .map(|dt| Value::Date(dt.with_timezone(&Utc)))
            .map_err(|_| ValueError::decode(text, DataType::Date)),
        DataType::Array => match parse_json(text, DataType::Array)? {
            json @ serde_json::Value::Array(_) => Ok(Value::from_json(json)),
            _ => Err(ValueError::decode(text, DataType::Array)),
        },
        DataType::Object => match parse_json(text, DataType::Object)? {
            json @ serde_json::Value::Object(_) => Ok(Value::from_json(json)),
            _ => Err(ValueError::decode(text, DataType::Object)),
        },
    }
}

/// Encodes a typed value as field text according to the declared kind.
///
/// # Errors
///
/// Returns `ValueError::TypeMismatch` when the value does not inhabit the
/// declared kind. Absent fields (`Value::Null`) are the record codec's
/// concern and are rejected here like any other mismatch.
pub fn value_to_str(data_type: DataType, value: &Value) -> ValueResult<String> {
    match (data_type, value) {
        (DataType::String, Value::String(s)) => Ok(s.clone()),
        (DataType::Number, Value::Int(i)) => Ok(i.to_string()),
        (DataType::Number, Value::Float(f)) => Ok(format_float(*f)),
        (DataType::Boolean, Value::Boolean(b)) => Ok(b.to_string()),
        (DataType::Date, Value::Date(dt)) => {
            Ok(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        }
        (DataType::Array, array @ Value::Array(_)) => Ok(array.to_json().to_string()),
        (DataType::Object, object @ Value::Object(_)) => Ok(object.to_json().to_string()),
        (expected, actual) => Err(ValueError::TypeMismatch {
            expected,
            actual: actual.kind_name(),
        }),
    }
}

/// Integer first, float fallback: "30" decodes as Int, "30.5", "1e3" and
/// integers beyond i64 as Float.
fn parse_number(text: &str) -> ValueResult<Value> {
    if let Ok(i) = text.parse::<i64>() {
        return Ok(Value::Int(i));
    }
    text.parse::<f64>()
        .map(Value::Float)
        .map_err(|_| ValueError::decode(text, DataType::Number))
}

fn parse_json(text: &str, expected: DataType) -> ValueResult<serde_json::Value> {
    serde_json::from_str(text).map_err(|_| ValueError::decode(text, expected))
}

/// Finite floats always carry a '.' or exponent so the Int/Float split
/// survives re-parsing; non-finite values use their decimal spellings.
fn format_float(f: f64) -> String {
    let s = f.to_string();
    if f.is_finite() && !s.contains('.') && !s.contains('e') && !s.contains('E') {
        format!("{}.0", s)
    } else {
        s
    }
}
