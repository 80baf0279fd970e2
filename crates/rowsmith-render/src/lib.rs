//! Serializers for rowsmith record sequences.
//!
//! Three textual output forms:
//!
//! - [`sql::to_sql_inserts`] - one `INSERT INTO ...;` statement per record
//! - [`csv::to_csv`] - one delimited-text blob with a header line
//! - [`json::to_json`] - a pretty-printed JSON array
//!
//! All serializers take the column order from the first record and assume
//! homogeneous input: the generator is the sole in-scope producer and
//! always emits identical key sets across one call's output, so the
//! serializers do not re-validate that precondition. Empty input is
//! valid and produces empty output, never an error.

pub mod csv;
pub mod error;
pub mod json;
pub mod sql;

// Re-exports for convenience
pub use crate::csv::to_csv;
pub use error::RenderError;
pub use json::to_json;
pub use sql::to_sql_inserts;
