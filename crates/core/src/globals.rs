//! Inline global-variable bootstrapping.

use serde::Serialize;

use crate::error::{HeadError, Result};

/// Serialize a value to JSON, or `null` when absent.
///
/// Falsy values (`0`, `false`, `""`) are serialized as themselves, not as `null`.
pub fn serialize_global<T: Serialize + ?Sized>(value: Option<&T>) -> Result<String> {
    match value {
        Some(value) => {
            serde_json::to_string(value).map_err(|e| HeadError::Serialization(e.to_string()))
        }
        None => Ok("null".to_string()),
    }
}

/// Build the `window.<name>=<json>` statement for one global.
///
/// `name` is inserted as-is; it becomes script source, so it must be a safe
/// identifier.
pub fn global_assignment<T: Serialize + ?Sized>(name: &str, value: Option<&T>) -> Result<String> {
    let serialized = serialize_global(value).map_err(|e| HeadError::GlobalSerialization {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    Ok(format!("window.{name}={serialized}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde_json::json;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(
            &self,
            _serializer: S,
        ) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("cycle detected"))
        }
    }

    #[test]
    fn test_absent_value_is_null() {
        assert_eq!(serialize_global::<serde_json::Value>(None).unwrap(), "null");
    }

    #[test]
    fn test_object_value() {
        assert_eq!(serialize_global(Some(&json!({"a": 1}))).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn test_object_keeps_key_order() {
        let value: serde_json::Value = serde_json::from_str(r#"{"b":1,"a":2}"#).unwrap();
        assert_eq!(serialize_global(Some(&value)).unwrap(), r#"{"b":1,"a":2}"#);
    }

    #[test]
    fn test_falsy_values_serialize_as_themselves() {
        assert_eq!(serialize_global(Some(&json!(0))).unwrap(), "0");
        assert_eq!(serialize_global(Some(&json!(false))).unwrap(), "false");
        assert_eq!(serialize_global(Some(&json!(""))).unwrap(), r#""""#);
    }

    #[test]
    fn test_global_assignment() {
        let script = global_assignment("APP_CONFIG", Some(&json!({"debug": true}))).unwrap();
        assert_eq!(script, r#"window.APP_CONFIG={"debug":true}"#);
    }

    #[test]
    fn test_global_assignment_absent() {
        let script = global_assignment::<serde_json::Value>("user", None).unwrap();
        assert_eq!(script, "window.user=null");
    }

    #[test]
    fn test_serialization_failure_propagates() {
        let result = global_assignment("broken", Some(&Unserializable));
        match result {
            Err(HeadError::GlobalSerialization { name, reason }) => {
                assert_eq!(name, "broken");
                assert!(reason.contains("cycle detected"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
