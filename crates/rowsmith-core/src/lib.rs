//! Core types for the rowsmith synthetic data toolkit.
//!
//! This crate defines the shared vocabulary between the record generator
//! and the serializers:
//!
//! - [`Value`] - a single scalar cell value (integer, float, string,
//!   timestamp, or null)
//! - [`Record`] - one flat row, an ordered mapping from field name to
//!   [`Value`]
//! - [`CustomSchema`] - a caller-supplied description of a custom record
//!   shape, loadable from YAML or JSON
//!
//! Field order within a [`Record`] is significant: serializers derive SQL
//! column lists and CSV headers from the field order of the first record
//! in a sequence, so every record produced by one generation call carries
//! its fields in the same order.

pub mod record;
pub mod schema;
pub mod value;

// Re-exports for convenience
pub use record::{Record, RecordBuilder};
pub use schema::{CustomSchema, FieldConstraints, FieldDefinition, FieldKind, SchemaError};
pub use value::{Value, DATETIME_FORMAT};
