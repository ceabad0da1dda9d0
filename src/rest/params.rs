//! Optional-parameter filtering.
//!
//! Every write body and every read query string goes through this module.
//! Parameter structs mark their optional fields with
//! `#[serde(skip_serializing_if = "Option::is_none")]`; [`compact`] then
//! strips any `null` that still made it into the top-level object (for
//! example from a caller-supplied raw body). The result: an absent parameter
//! never reaches the wire, neither as `null` nor as an empty marker.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::rest::ResourceError;

/// Drops every top-level entry whose value is `null`.
#[must_use]
pub fn compact(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter().filter(|(_, v)| !v.is_null()).collect()
}

/// Serializes a parameter struct into a filtered JSON body.
///
/// Objects are compacted; any other JSON value is returned unchanged.
///
/// # Errors
///
/// Returns [`ResourceError::Serialization`] if `params` fails to serialize.
pub fn to_body<T: Serialize + ?Sized>(params: &T) -> Result<Value, ResourceError> {
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(Value::Object(compact(map))),
        other => Ok(other),
    }
}

/// Serializes a parameter struct into query string pairs.
///
/// Null values are skipped and scalars are stringified. Arrays become
/// comma-separated lists of their non-null elements; an array with no such
/// elements is omitted like an absent parameter. Nested objects, inside an
/// array or not, are sent as JSON text.
///
/// # Errors
///
/// Returns [`ResourceError::Serialization`] if `params` fails to serialize.
pub fn to_query<T: Serialize + ?Sized>(
    params: &T,
) -> Result<HashMap<String, String>, ResourceError> {
    let Value::Object(map) = serde_json::to_value(params)? else {
        return Ok(HashMap::new());
    };

    let mut query = HashMap::new();
    for (key, val) in compact(map) {
        let value = match val {
            Value::Array(arr) => {
                let values: Vec<String> = arr.into_iter().filter_map(query_value).collect();
                if values.is_empty() {
                    continue;
                }
                values.join(",")
            }
            other => match query_value(other) {
                Some(value) => value,
                None => continue,
            },
        };
        query.insert(key, value);
    }

    Ok(query)
}

fn query_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    struct Filters {
        #[serde(skip_serializing_if = "Option::is_none")]
        group_id: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        languages: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        public: Option<bool>,
    }

    #[test]
    fn test_compact_drops_null_entries_only() {
        let map = json!({"a": 1, "b": null, "c": "", "d": 0, "e": false})
            .as_object()
            .unwrap()
            .clone();

        let compacted = compact(map);

        assert_eq!(
            Value::Object(compacted),
            json!({"a": 1, "c": "", "d": 0, "e": false})
        );
    }

    #[test]
    fn test_to_body_omits_absent_fields() {
        let body = to_body(&Filters {
            name: Some("Docs".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(body, json!({"name": "Docs"}));
    }

    #[test]
    fn test_to_body_of_empty_params_is_empty_object() {
        assert_eq!(to_body(&Filters::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_to_body_strips_nulls_from_raw_values() {
        let body = to_body(&json!({"name": "Docs", "description": null})).unwrap();
        assert_eq!(body, json!({"name": "Docs"}));
    }

    #[test]
    fn test_to_query_stringifies_scalars_and_arrays() {
        let query = to_query(&Filters {
            group_id: Some(3),
            name: None,
            languages: Some(vec!["de".to_string(), "fr".to_string()]),
            public: Some(true),
        })
        .unwrap();

        assert_eq!(query.len(), 3);
        assert_eq!(query.get("groupId"), Some(&"3".to_string()));
        assert_eq!(query.get("languages"), Some(&"de,fr".to_string()));
        assert_eq!(query.get("public"), Some(&"true".to_string()));
        assert!(!query.contains_key("name"));
    }

    #[test]
    fn test_to_query_sends_objects_as_json_text() {
        let query = to_query(&json!({"scope": {"type": "file", "id": 7}})).unwrap();

        let sent: Value = serde_json::from_str(&query["scope"]).unwrap();
        assert_eq!(sent, json!({"type": "file", "id": 7}));
    }

    #[test]
    fn test_to_query_keeps_every_kind_of_array_element() {
        let query = to_query(&json!({
            "flags": [true, false],
            "mixed": ["de", 2, null, {"a": 1}]
        }))
        .unwrap();

        assert_eq!(query["flags"], "true,false");
        assert_eq!(query["mixed"], r#"de,2,{"a":1}"#);
    }

    #[test]
    fn test_to_query_omits_empty_arrays() {
        let query = to_query(&json!({
            "languages": [],
            "nulls": [null],
            "name": "Docs"
        }))
        .unwrap();

        assert_eq!(query.len(), 1);
        assert_eq!(query["name"], "Docs");
    }

    #[test]
    fn test_to_query_of_non_object_is_empty() {
        assert!(to_query(&json!([1, 2])).unwrap().is_empty());
    }
}
