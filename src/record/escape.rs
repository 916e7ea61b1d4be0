//! Field-layer escaping
//!
//! Record and log lines are flat text, so the structural characters must
//! never appear unescaped inside a field. Escaping happens when fields are
//! joined into a line; coercion one layer down only ever sees unescaped
//! text.

use super::errors::{RecordError, RecordResult};

/// Separator between fields on a record or log line
pub const FIELD_SEPARATOR: char = ',';

/// Canonical absent-field placeholder.
///
/// Compared against the raw (still escaped) field segment; an encoded
/// value can never equal it because literal backslashes encode doubled.
pub const NULL_TOKEN: &str = "\\0";

/// Escapes backslashes, separators, and newlines in encoded field text.
pub fn escape_field(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}

/// Reverses `escape_field`.
///
/// # Errors
///
/// Returns `RecordError::InvalidEscape` on a trailing backslash or a
/// backslash followed by anything outside the escape set; both indicate a
/// corrupted line.
pub fn unescape_field(text: &str) -> RecordResult<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some(',') => out.push(','),
            Some('n') => out.push('\n'),
            _ => {
                return Err(RecordError::InvalidEscape { text: text.into() });
            }
        }
    }
    Ok(out)
}

/// Splits a line on unescaped separators, returning the raw (still
/// escaped) field segments.
///
/// The empty line is one empty segment, matching the encoding of a single
/// empty string field; zero-arity lines are handled by the codec above.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for c in line.chars() {
        if escaped {
            current.push(c);
            escaped = false;
        } else if c == '\\' {
            current.push(c);
            escaped = true;
        } else if c == FIELD_SEPARATOR {
            segments.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    segments.push(current);
    segments
}
