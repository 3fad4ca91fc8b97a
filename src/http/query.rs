//! Query string encoding
//!
//! Query objects are arbitrary JSON; nested values are flattened using
//! bracket notation (`filters[email]=a@b.c`, `ids[0]=1`).

use crate::types::{JsonObject, JsonValue};

/// Flatten a query object into ordered key/value pairs
pub fn encode_query(query: &JsonObject) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in query {
        push_value(&mut pairs, key.clone(), value);
    }
    pairs
}

fn push_value(pairs: &mut Vec<(String, String)>, key: String, value: &JsonValue) {
    match value {
        JsonValue::Object(map) => {
            for (sub, inner) in map {
                push_value(pairs, format!("{key}[{sub}]"), inner);
            }
        }
        JsonValue::Array(items) => {
            for (index, inner) in items.iter().enumerate() {
                push_value(pairs, format!("{key}[{index}]"), inner);
            }
        }
        JsonValue::String(s) => pairs.push((key, s.clone())),
        JsonValue::Null => pairs.push((key, String::new())),
        JsonValue::Bool(_) | JsonValue::Number(_) => pairs.push((key, value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn pairs(value: JsonValue) -> Vec<(String, String)> {
        let JsonValue::Object(map) = value else {
            panic!("expected object");
        };
        encode_query(&map)
    }

    #[test]
    fn test_scalars() {
        let mut encoded = pairs(json!({"limit": 100, "search": "bob", "active": true}));
        encoded.sort();
        assert_eq!(
            encoded,
            vec![
                ("active".to_string(), "true".to_string()),
                ("limit".to_string(), "100".to_string()),
                ("search".to_string(), "bob".to_string()),
            ]
        );
    }

    #[test]
    fn test_nested_object() {
        let encoded = pairs(json!({"filters": {"email": "a@b.c"}}));
        assert_eq!(
            encoded,
            vec![("filters[email]".to_string(), "a@b.c".to_string())]
        );
    }

    #[test]
    fn test_array() {
        let encoded = pairs(json!({"ids": [3, 7]}));
        assert_eq!(
            encoded,
            vec![
                ("ids[0]".to_string(), "3".to_string()),
                ("ids[1]".to_string(), "7".to_string()),
            ]
        );
    }

    #[test]
    fn test_null_and_empty() {
        assert_eq!(
            pairs(json!({"status": null})),
            vec![("status".to_string(), String::new())]
        );
        assert!(pairs(json!({})).is_empty());
    }
}
