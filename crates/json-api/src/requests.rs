//! Request field helpers.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string, number or boolean as text. Clients send prices and
/// quantities either way.
pub(crate) fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) => Some(value),
        Some(other) => Some(other.to_string()),
    })
}
