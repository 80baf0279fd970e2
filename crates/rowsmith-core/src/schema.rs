//! Custom schema definitions for schema-driven record generation.
//!
//! A custom schema is an ordered list of field definitions, each naming a
//! field, a generation type, and optional type-specific constraints.
//! Schemas load from YAML or JSON:
//!
//! ```yaml
//! fields:
//!   - name: id
//!     type: id
//!   - name: score
//!     type: amount
//!     constraints:
//!       min: 0
//!       max: 10
//!   - name: tier
//!     type: choice
//!     constraints:
//!       options: [bronze, silver, gold]
//! ```
//!
//! Unrecognized type tags deserialize to [`FieldKind::Unknown`] instead of
//! failing, so a malformed schema degrades to filler content for the
//! affected fields only.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::path::Path;

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML schema: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON schema: {0}")]
    Json(#[from] serde_json::Error),
}

/// Generation type for a custom schema field.
///
/// The tag set mirrors the built-in entity shapes: identity sequence,
/// person data, bounded amounts, date ranges, fixed choices, and free
/// text. Any other tag maps to [`FieldKind::Unknown`], which generates a
/// filler word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// Dense 1-based sequence matching record position
    Id,
    /// Person name
    Name,
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Postal address on a single line
    Address,
    /// Amount in a [min, max] range, rounded to 2 decimal places
    Amount,
    /// Timestamp in a [start, end] range
    Date,
    /// Uniform pick from a fixed options list
    Choice,
    /// Free text up to max_length characters
    Text,
    /// Unrecognized type tag - generates a filler word
    #[default]
    Unknown,
}

impl FieldKind {
    /// Map a type tag to a field kind. Unrecognized tags map to `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "id" => Self::Id,
            "name" => Self::Name,
            "email" => Self::Email,
            "phone" => Self::Phone,
            "address" => Self::Address,
            "amount" => Self::Amount,
            "date" => Self::Date,
            "choice" => Self::Choice,
            "text" => Self::Text,
            _ => Self::Unknown,
        }
    }

    /// The canonical type tag for this kind.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Amount => "amount",
            Self::Date => "date",
            Self::Choice => "choice",
            Self::Text => "text",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl Serialize for FieldKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// Type-specific constraints for a custom schema field.
///
/// All fields are optional; each generation type reads only the
/// constraints it understands and falls back to documented defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConstraints {
    /// Lower bound for `amount` fields (default 0)
    pub min: Option<f64>,

    /// Upper bound for `amount` fields (default 1000)
    pub max: Option<f64>,

    /// Start bound for `date` fields, RFC 3339 or `YYYY-MM-DD`
    /// (default one year before now)
    pub start: Option<String>,

    /// End bound for `date` fields, RFC 3339 or `YYYY-MM-DD`
    /// (default now)
    pub end: Option<String>,

    /// Options list for `choice` fields (default `[option1, option2]`)
    pub options: Option<Vec<String>>,

    /// Character cap for `text` fields (default 100)
    pub max_length: Option<usize>,
}

/// A single field in a custom schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,

    /// Generation type
    #[serde(rename = "type", default)]
    pub kind: FieldKind,

    /// Type-specific constraints
    #[serde(default)]
    pub constraints: FieldConstraints,
}

/// A custom record shape: an ordered list of field definitions.
///
/// Field order is preserved from the schema document and carries through
/// to generated records, SQL column lists, and CSV headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomSchema {
    /// Field definitions in declaration order
    pub fields: Vec<FieldDefinition>,
}

impl CustomSchema {
    /// Parse a schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a schema from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a schema from a file. `.json` files parse as JSON, anything
    /// else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&contents)
        } else {
            Self::from_yaml(&contents)
        }
    }

    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml() {
        let schema = CustomSchema::from_yaml(
            r#"
fields:
  - name: id
    type: id
  - name: score
    type: amount
    constraints:
      min: 0
      max: 10
  - name: tier
    type: choice
    constraints:
      options: [bronze, silver, gold]
"#,
        )
        .unwrap();

        assert_eq!(schema.fields.len(), 3);
        assert_eq!(schema.field_names(), vec!["id", "score", "tier"]);

        let score = schema.get_field("score").unwrap();
        assert_eq!(score.kind, FieldKind::Amount);
        assert_eq!(score.constraints.min, Some(0.0));
        assert_eq!(score.constraints.max, Some(10.0));

        let tier = schema.get_field("tier").unwrap();
        assert_eq!(
            tier.constraints.options,
            Some(vec![
                "bronze".to_string(),
                "silver".to_string(),
                "gold".to_string()
            ])
        );
    }

    #[test]
    fn test_from_json() {
        let schema = CustomSchema::from_json(
            r#"{
                "fields": [
                    {"name": "id", "type": "id"},
                    {"name": "note", "type": "text", "constraints": {"max_length": 50}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(schema.fields.len(), 2);
        assert_eq!(
            schema.get_field("note").unwrap().constraints.max_length,
            Some(50)
        );
    }

    #[test]
    fn test_unknown_type_tag_does_not_fail() {
        let schema = CustomSchema::from_yaml(
            r#"
fields:
  - name: mystery
    type: nonexistent
"#,
        )
        .unwrap();

        assert_eq!(schema.fields[0].kind, FieldKind::Unknown);
    }

    #[test]
    fn test_missing_type_defaults_to_unknown() {
        let schema = CustomSchema::from_yaml(
            r#"
fields:
  - name: untyped
"#,
        )
        .unwrap();

        assert_eq!(schema.fields[0].kind, FieldKind::Unknown);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let result = CustomSchema::from_yaml("fields: 42");
        assert!(matches!(result, Err(SchemaError::Yaml(_))));
    }

    #[test]
    fn test_field_kind_tag_round_trip() {
        for kind in [
            FieldKind::Id,
            FieldKind::Name,
            FieldKind::Email,
            FieldKind::Phone,
            FieldKind::Address,
            FieldKind::Amount,
            FieldKind::Date,
            FieldKind::Choice,
            FieldKind::Text,
        ] {
            assert_eq!(FieldKind::from_tag(kind.as_tag()), kind);
        }
    }
}
