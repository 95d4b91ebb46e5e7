//! Recursive key rewriting for JSON values.
//!
//! Application code speaks camelCase, the API boundary speaks snake_case.
//! [`encode_to_wire_format`] runs on every outgoing request body and
//! [`decode_from_wire_format`] on every incoming response body.
//!
//! Values are walked as [`serde_json::Value`] trees. Arrays keep their order
//! and length, objects get every key converted, and scalars are copied
//! as-is. The input is only borrowed; a new tree is always built. Since a
//! `Value` owns its children it cannot be cyclic, so recursion depth is
//! bounded by the nesting depth of the document.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::casing::{KeyCase, is_snake_case};

/// Rewrites every object key in `value` into `case`.
///
/// If two keys of one object land on the same converted key, the later one
/// wins.
pub fn transcode_keys(value: &Value, case: KeyCase) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| transcode_keys(item, case))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (case.apply(key), transcode_keys(item, case)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
    }
}

/// Rewrites application-convention keys into snake_case.
pub fn encode_value(value: &Value) -> Value {
    transcode_keys(value, KeyCase::Snake)
}

/// Rewrites snake_case keys into camelCase.
pub fn decode_value(value: &Value) -> Value {
    transcode_keys(value, KeyCase::Camel)
}

/// Rewrites snake_case keys into camelCase or PascalCase.
///
/// Asking for [`KeyCase::Snake`] leaves an already-wire document as it is.
pub fn decode_value_as(value: &Value, case: KeyCase) -> Value {
    transcode_keys(value, case)
}

/// Serializes `value` and rewrites its keys into the wire convention.
///
/// # Errors
///
/// Fails only when `T`'s `Serialize` implementation fails, e.g. a map with
/// non-string keys.
///
/// # Example
///
/// ```
/// #[derive(Serialize)]
/// #[serde(rename_all = "camelCase")]
/// struct LoginUserRequest { email_address: String }
///
/// let wire = encode_to_wire_format(&LoginUserRequest { email_address: "a@b.com".into() })?;
/// assert_eq!(wire, json!({ "email_address": "a@b.com" }));
/// ```
pub fn encode_to_wire_format<T>(value: &T) -> Result<Value, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let app = serde_json::to_value(value)?;
    Ok(encode_value(&app))
}

/// Rewrites wire keys into camelCase and deserializes the result into `T`.
///
/// # Errors
///
/// Fails when the decoded document does not match `T`.
pub fn decode_from_wire_format<T>(value: &Value) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned,
{
    serde_json::from_value(decode_value(value))
}

/// Lists the paths of every key in `value` that is not snake_case.
///
/// Paths are `/`-joined object keys and array indices, e.g.
/// `/scheduleDays/0/dayOfWeekIndex`. An empty list means the document is
/// ready to go on the wire.
pub fn non_wire_keys(value: &Value) -> Vec<String> {
    let mut found = Vec::new();
    collect_non_wire_keys(value, "", &mut found);
    found
}

fn collect_non_wire_keys(value: &Value, prefix: &str, found: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                collect_non_wire_keys(item, &format!("{}/{}", prefix, index), found);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                let path = format!("{}/{}", prefix, key);
                if !is_snake_case(key) {
                    found.push(path.clone());
                }
                collect_non_wire_keys(item, &path, found);
            }
        }
        _ => {}
    }
}
