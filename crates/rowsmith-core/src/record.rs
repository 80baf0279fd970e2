//! Flat record representation - one synthetic row.

use crate::value::Value;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One flat row: an ordered mapping from field name to [`Value`].
///
/// Field order is insertion order. The generator inserts fields in the
/// declared entity-shape order, and the serializers rely on that order
/// when building SQL column lists and CSV headers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new record with a builder pattern.
    pub fn builder() -> RecordBuilder {
        RecordBuilder {
            fields: Vec::new(),
        }
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Replace the value of an existing field, or append it if absent.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Iterate over field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over (name, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for [`Record`].
pub struct RecordBuilder {
    fields: Vec<(String, Value)>,
}

impl RecordBuilder {
    /// Add a field to the record.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Build the record.
    pub fn build(self) -> Record {
        Record {
            fields: self.fields,
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = Record::builder()
            .field("id", 1i64)
            .field("name", "Alice")
            .field("score", 9.5)
            .build();

        assert_eq!(record.len(), 3);
        assert_eq!(record.get("id"), Some(&Value::Int(1)));
        assert_eq!(record.get("name"), Some(&Value::Str("Alice".to_string())));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_field_order_is_insertion_order() {
        let record = Record::builder()
            .field("zebra", 1i64)
            .field("apple", 2i64)
            .field("mango", 3i64)
            .build();

        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut record = Record::builder()
            .field("id", 7i64)
            .field("name", "Bob")
            .build();

        record.set("id", Value::Int(1));

        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["id", "name"]);
        assert_eq!(record.get("id"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let record = Record::builder()
            .field("b", 2i64)
            .field("a", 1i64)
            .build();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, "{\"b\":2,\"a\":1}");
    }
}
