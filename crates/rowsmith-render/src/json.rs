//! JSON rendering.

use crate::error::RenderError;
use rowsmith_core::Record;

/// Convert records to a pretty-printed JSON array.
///
/// Field order is preserved and timestamps render as
/// `YYYY-MM-DD HH:MM:SS` strings. Empty input yields `[]`.
pub fn to_json(records: &[Record]) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(records)?)
}
