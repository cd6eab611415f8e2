//! Bound parameter values

use serde::Serialize;

/// A value bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    Integer(i64),
    Text(String),
    /// Stored as 0/1 integers
    Bool(bool),
}

impl SqlParam {
    /// Parse a raw path segment as a record id.
    ///
    /// Numeric segments bind as integers. Anything else binds as text and
    /// simply matches no integer primary key.
    pub fn id(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(id) => SqlParam::Integer(id),
            Err(_) => SqlParam::Text(raw.to_string()),
        }
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::Integer(value)
    }
}

impl From<bool> for SqlParam {
    fn from(value: bool) -> Self {
        SqlParam::Bool(value)
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parsing() {
        assert_eq!(SqlParam::id("42"), SqlParam::Integer(42));
        assert_eq!(SqlParam::id(" 7 "), SqlParam::Integer(7));
        assert_eq!(SqlParam::id("abc"), SqlParam::Text("abc".to_string()));
    }

    #[test]
    fn test_serializes_untagged() {
        let params = vec![SqlParam::Bool(true), SqlParam::Integer(3), SqlParam::from("x")];
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!([true, 3, "x"]));
    }
}
