//! JSON decoding helpers shared by the request and state parsers.
//!
//! The panel's peers are lax about key case (`"Focused"`, `"focused"`,
//! `"APPLICATION"` all show up), so objects are matched on case-folded keys.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Lower-case every object key in `value`, recursively.
///
/// When two keys fold to the same name the later one in document order
/// wins, which needs `serde_json`'s `preserve_order`.
pub fn fold_key_case(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_lowercase(), fold_key_case(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_key_case).collect()),
        other => other,
    }
}

/// Decode `json` into `T`, matching object keys case-insensitively.
///
/// `T`'s field names must be lower case.
pub fn from_str_folded<T: DeserializeOwned>(json: &str) -> Result<T, serde_json::Error> {
    let value: Value = serde_json::from_str(json)?;
    serde_json::from_value(fold_key_case(value))
}

/// Decode the first JSON value in `bytes`, ignoring anything after it.
///
/// Empty input is an error.
pub fn first_value(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    Value::deserialize(&mut de)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn folds_nested_keys() {
        let folded = fold_key_case(json!([
            { "Focused": true, "RECT": { "Width": 3 } }
        ]));
        assert_eq!(folded, json!([{ "focused": true, "rect": { "width": 3 } }]));
    }

    #[test]
    fn later_duplicate_wins() {
        let folded = fold_key_case(serde_json::from_str(r#"{"focused":false,"Focused":true}"#).unwrap());
        assert_eq!(folded, json!({ "focused": true }));
    }

    #[test]
    fn first_value_ignores_trailing_bytes() {
        assert_eq!(first_value(br#"{"a":1} trailing"#).unwrap(), json!({ "a": 1 }));
        assert_eq!(first_value(b"null").unwrap(), Value::Null);
        assert!(first_value(b"").is_err());
        assert!(first_value(b"   ").is_err());
    }
}
