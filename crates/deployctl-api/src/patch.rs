//! JSON Patch construction for inventory update requests.
//!
//! The inventory service takes updates as an array of `{op, path, value}`
//! entries. Update descriptors are sparse structs whose fields derive
//! `Serialize` with `skip_serializing_if = "Option::is_none"`; building a
//! patch serializes the descriptor and walks the resulting JSON object,
//! one entry per present field. String-list fields are flattened to a
//! comma-joined string on the wire, with the literal `"none"` standing in
//! for an empty list ("clear this list").

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// Sentinel the platform uses for "clear this list".
pub const NONE_SENTINEL: &str = "none";

/// Patch operation tag. The inventory service accepts the RFC 6902 subset
/// `add` / `replace` / `remove`, always with a `value` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Replace,
    Remove,
}

/// A single patch entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchEntry {
    pub op: PatchOp,
    pub path: String,
    pub value: Value,
}

/// Build the patch entries for a sparse update descriptor.
///
/// Fields absent from the descriptor (serde-skipped `None`s) produce no
/// entry. Paths use the wire field names. The output is sorted by field
/// name so the same descriptor always yields the same patch.
pub fn entries<T: Serialize>(op: PatchOp, descriptor: &T) -> Result<Vec<PatchEntry>, Error> {
    let value =
        serde_json::to_value(descriptor).map_err(|e| Error::MalformedPatch(e.to_string()))?;

    let Value::Object(fields) = value else {
        return Err(Error::MalformedPatch(format!(
            "update descriptor must serialize to an object, got {}",
            type_name(&value)
        )));
    };

    let mut patch: Vec<PatchEntry> = fields
        .into_iter()
        .map(|(name, value)| PatchEntry {
            op,
            path: format!("/{name}"),
            value: flatten_string_list(value),
        })
        .collect();
    patch.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(patch)
}

/// Apply the platform's list encoding: a sequence of strings becomes a
/// single comma-joined string, and an empty sequence becomes `"none"`.
/// Any other value passes through untouched.
fn flatten_string_list(value: Value) -> Value {
    let Value::Array(items) = &value else {
        return value;
    };

    let mut joined: Vec<&str> = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) => joined.push(s),
            _ => return value,
        }
    }

    if joined.is_empty() {
        Value::String(NONE_SENTINEL.to_owned())
    } else {
        Value::String(joined.join(","))
    }
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
