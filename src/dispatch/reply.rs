//! Tagged command results.

use serde::Serialize;

/// Successful result of a command.
///
/// Serializes as `{"type": "value", "value": "..."}`, `{"type": "nil"}`, etc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Reply {
    Value(String),
    Integer(i64),
    Bool(bool),
    Nil,
}

impl From<Option<String>> for Reply {
    fn from(value: Option<String>) -> Self {
        value.map_or(Reply::Nil, Reply::Value)
    }
}

impl From<usize> for Reply {
    fn from(count: usize) -> Self {
        Reply::Integer(i64::try_from(count).unwrap_or(i64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(Reply::Value("firstTask".into())).unwrap();
        assert_eq!(json["type"], "value");
        assert_eq!(json["value"], "firstTask");

        let json = serde_json::to_value(Reply::Integer(2)).unwrap();
        assert_eq!(json["type"], "integer");
        assert_eq!(json["value"], 2);

        let json = serde_json::to_value(Reply::Bool(false)).unwrap();
        assert_eq!(json["type"], "bool");

        let json = serde_json::to_value(Reply::Nil).unwrap();
        assert_eq!(json, serde_json::json!({"type": "nil"}));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Reply::from(None), Reply::Nil);
        assert_eq!(Reply::from(Some("v".to_string())), Reply::Value("v".into()));
    }
}
