//! Flattening of typed list filters into URL query pairs.

use serde::Serialize;
use serde_json::Value;

use crate::error::CommonRequestError;

/// Flatten a serializable filter struct into `(key, value)` pairs.
///
/// `None` fields are dropped, scalars are stringified, arrays repeat the key
/// once per element and nested objects are sent as compact JSON.
pub fn to_query_pairs<Q: Serialize + ?Sized>(
    query: &Q,
) -> Result<Vec<(String, String)>, CommonRequestError> {
    let map = match serde_json::to_value(query)? {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(CommonRequestError::InvalidQuery(format!(
                "expected an object, got {other}"
            )));
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(item) = scalar(item) {
                        pairs.push((key.clone(), item));
                    }
                }
            }
            other => {
                if let Some(value) = scalar(other) {
                    pairs.push((key, value));
                }
            }
        }
    }
    Ok(pairs)
}

fn scalar(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Filter {
        limit: Option<u32>,
        after: Option<String>,
        purpose: Option<String>,
        ids: Vec<&'static str>,
    }

    #[test]
    fn drops_none_and_repeats_arrays() {
        let pairs = to_query_pairs(&Filter {
            limit: Some(10),
            after: None,
            purpose: Some("fine-tune".into()),
            ids: vec!["a", "b"],
        })
        .unwrap();

        assert!(pairs.contains(&("limit".into(), "10".into())));
        assert!(pairs.contains(&("purpose".into(), "fine-tune".into())));
        assert!(pairs.contains(&("ids".into(), "a".into())));
        assert!(pairs.contains(&("ids".into(), "b".into())));
        assert!(!pairs.iter().any(|(k, _)| k == "after"));
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn unit_query_is_empty() {
        assert!(to_query_pairs(&()).unwrap().is_empty());
    }

    #[test]
    fn rejects_non_object() {
        assert!(matches!(
            to_query_pairs(&42),
            Err(CommonRequestError::InvalidQuery(_))
        ));
    }
}
