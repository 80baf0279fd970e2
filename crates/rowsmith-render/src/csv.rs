//! CSV rendering.

use crate::error::RenderError;
use ::csv::Writer;
use rowsmith_core::{Record, Value, DATETIME_FORMAT};

/// Convert records to one CSV blob: a header line of field names
/// followed by one line per record.
///
/// The header comes from the first record's field order. Quoting and
/// escaping of embedded delimiters or quotes follow standard CSV rules.
/// Null values render as empty fields. Empty input yields an empty
/// string.
pub fn to_csv(records: &[Record]) -> Result<String, RenderError> {
    let Some(first) = records.first() else {
        return Ok(String::new());
    };

    let columns: Vec<&str> = first.field_names().collect();
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(&columns)?;

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|column| csv_field(record.get(column).unwrap_or(&Value::Null)))
            .collect();
        writer.write_record(&row)?;
    }

    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| RenderError::Io(std::io::Error::other(e.to_string())))?;
    Ok(String::from_utf8(bytes)?)
}

/// Render a single value as a CSV field (unquoted; the writer handles
/// quoting).
fn csv_field(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Str(s) => s.clone(),
        Value::DateTime(dt) => dt.format(DATETIME_FORMAT).to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
    }
}
