//! Tolerant field deserializers for parser output
//!
//! A single odd value (a float length, a numeric speaker, a stray string in
//! a list of speeches) is coerced or dropped on its own instead of failing
//! the whole corpus.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

/// Strings, numbers and booleans as text; anything else is `None`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Act, scene and play labels. Null or structured values become "".
pub(super) fn label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value).unwrap_or_default())
}

/// Raw speaker label. Numbers become strings; other non-strings mean "no speaker".
pub(super) fn speaker<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => None,
        other => {
            debug!(speaker = %other, "non-text speaker label ignored");
            None
        }
    })
}

/// Declared word length. Anything but a non-negative integer is dropped, so
/// the length is derived from the text instead.
pub(super) fn length<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Null => None,
        Value::Number(n) => match n.as_u64().and_then(|n| usize::try_from(n).ok()) {
            Some(n) => Some(n),
            None => {
                debug!(length = %n, "declared length is not a count; deriving from text");
                None
            }
        },
        other => {
            debug!(length = %other, "declared length is not a number; deriving from text");
            None
        }
    })
}

/// Spoken text. Numbers and booleans are kept as text; other values are empty.
pub(super) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value).unwrap_or_default())
}

/// Raw names in a present set. Non-scalar entries are skipped.
pub(super) fn names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        Value::Null => Vec::new(),
        other => scalar_text(&other).into_iter().collect(),
    })
}

/// A list of records where each malformed entry is logged and skipped.
pub(super) fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => {
            let what = std::any::type_name::<T>().rsplit("::").next().unwrap_or("record");
            Ok(parse_records(items, what))
        }
        Value::Null => Ok(Vec::new()),
        other => {
            warn!(found = %kind(&other), "expected a list of records; treating it as empty");
            Ok(Vec::new())
        }
    }
}

/// Convert each item on its own, dropping the ones that do not fit `T`.
pub(super) fn parse_records<T: DeserializeOwned>(items: Vec<Value>, what: &str) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index, record = what, error = %e, "skipping malformed record");
                None
            }
        })
        .collect()
}

/// Short name of a JSON value's type, for messages.
pub(super) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
