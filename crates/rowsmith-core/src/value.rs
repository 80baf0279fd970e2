//! Scalar cell values for generated records.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Timestamp rendering format shared by the SQL, CSV, and JSON serializers.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single scalar value inside a generated record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// String value
    Str(String),

    /// Date/time in UTC
    DateTime(DateTime<Utc>),

    /// Null value
    Null,
}

impl Value {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a DateTime.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Str(s) => serializer.serialize_str(s),
            // Timestamps serialize as plain strings so JSON output matches
            // the SQL/CSV rendering of the same value.
            Self::DateTime(dt) => {
                serializer.serialize_str(&dt.format(DATETIME_FORMAT).to_string())
            }
            Self::Null => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int(42).as_i64(), Some(42));
        assert_eq!(Value::Float(3.25).as_f64(), Some(3.25));
        assert_eq!(Value::Str("test".to_string()).as_str(), Some("test"));
        assert!(Value::Null.is_null());

        // Cross-type conversions
        assert_eq!(Value::Int(42).as_f64(), Some(42.0));
        assert_eq!(Value::Str("x".to_string()).as_i64(), None);
    }

    #[test]
    fn test_datetime_serializes_as_string() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        let json = serde_json::to_string(&Value::DateTime(dt)).unwrap();
        assert_eq!(json, "\"2024-03-15 09:30:00\"");
    }

    #[test]
    fn test_null_serializes_as_null() {
        let json = serde_json::to_string(&Value::Null).unwrap();
        assert_eq!(json, "null");
    }
}
