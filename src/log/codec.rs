//! Line-oriented log encoding and decoding
//!
//! The log is UTF-8 text, one entry per line, terminated by `\n` or `\r`.
//! Blank lines are ignored. Each non-blank line is a status tag followed by
//! a compact JSON object (see `entry.rs` for the tag format). There is no
//! header, no length prefix and no checksum.
//!
//! Corruption policy is STRICT: a live line whose payload fails to
//! deserialize as a JSON object fails the whole decode with
//! [`LogError::CorruptRecord`]. Tombstoned payloads are never re-parsed.
//!
//! Lines whose tag is unrecognized are inert for queries but must be
//! preserved verbatim on rewrite, so rewriting with the same delete query
//! twice yields the same file content.

use serde_json::Value;

use super::entry::{ParsedLine, LIVE_TAG, TOMBSTONE_TAG};
use super::errors::{LogError, LogResult};
use crate::Document;

/// Splits raw file content into lines.
///
/// Both `\n` and `\r` terminate a line; `\r\n` therefore produces an empty
/// segment, which classifies as blank and is ignored.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split(['\n', '\r'])
}

/// Decodes the payload of a live line into a document.
///
/// `line` is the 1-based position in the file, used for error context only.
pub fn decode_live(payload: &str, line: usize) -> LogResult<Document> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| LogError::corrupt(line, e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(LogError::corrupt(
            line,
            format!("expected a JSON object, got {}", type_name(&other)),
        )),
    }
}

/// Decodes full file content into the ordered sequence of live documents.
///
/// Tombstoned, blank and unrecognized lines are skipped; unrecognized lines
/// are reported through a warn event so drift is visible to operators.
pub fn decode(content: &str) -> LogResult<Vec<Document>> {
    let mut documents = Vec::new();
    let mut unrecognized = 0usize;

    for (idx, raw) in split_lines(content).enumerate() {
        match ParsedLine::classify(raw) {
            ParsedLine::Live { payload } => {
                documents.push(decode_live(payload, idx + 1)?);
            }
            ParsedLine::Tombstoned { .. } | ParsedLine::Blank => {}
            ParsedLine::Unrecognized { .. } => unrecognized += 1,
        }
    }

    if unrecognized > 0 {
        tracing::warn!(count = unrecognized, "skipped lines with unrecognized tag");
    }

    Ok(documents)
}

/// Encodes a document as a live log line (without terminator).
///
/// serde_json's compact encoding escapes control characters, so the output
/// cannot contain a raw line terminator; the check below guards against a
/// non-conforming serializer rather than an expected input.
pub fn encode_live(document: &Document) -> LogResult<String> {
    let payload = serde_json::to_string(document)?;
    if payload.contains(['\n', '\r']) {
        return Err(LogError::UnencodableRecord);
    }
    Ok(format!("{}{}", LIVE_TAG, payload))
}

/// Rewrites a live line's tag to the tombstone tag, payload untouched.
///
/// Valid only for lines known to carry the live tag; both tags are one byte
/// wide, which is what keeps the payload bytes stable.
pub fn tombstone_line(line: &str) -> String {
    debug_assert!(line.starts_with(LIVE_TAG));
    format!("{}{}", TOMBSTONE_TAG, &line[1..])
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
