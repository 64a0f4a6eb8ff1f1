//! Forgiving `deserialize_with` helpers.
//!
//! Content files are hand edited. A field holding the wrong JSON type decodes as
//! empty rather than rejecting the whole document.

use serde::Deserialize;
use serde::de::{DeserializeOwned, Deserializer};
use serde_json::Value;

/// Decode a sequence, treating non-arrays as empty and skipping bad elements.
pub fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Null => return Ok(Vec::new()),
        other => {
            log::warn!(
                "expected a list in content, found {}; treating as empty",
                kind(&other)
            );
            return Ok(Vec::new());
        }
    };

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                log::warn!("skipping malformed content entry {index}: {err}");
                None
            }
        })
        .collect())
}

/// Decode an optional text field. Numbers and booleans are stringified.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        Value::Number(value) => Some(value.to_string()),
        Value::Bool(value) => Some(value.to_string()),
        _ => None,
    })
}

/// Decode an optional nested record; anything that is not a valid object is absent.
pub fn record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => match serde_json::from_value(Value::Object(map)) {
            Ok(decoded) => Ok(Some(decoded)),
            Err(err) => {
                log::warn!("ignoring malformed nested content record: {err}");
                Ok(None)
            }
        },
        _ => Ok(None),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
