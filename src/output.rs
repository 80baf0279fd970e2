//! Output format selection, rendering, and file naming.

use clap::ValueEnum;
use rowsmith_core::Record;
use rowsmith_render::{to_csv, to_json, to_sql_inserts, RenderError};
use std::fmt;

/// Target serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// SQL INSERT statements
    Sql,
    /// Comma-separated values with a header line
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sql => "sql",
            Self::Csv => "csv",
            Self::Json => "json",
        })
    }
}

/// Conventional output filename for a table and format.
pub fn output_filename(table: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Sql => format!("{table}_inserts.sql"),
        OutputFormat::Csv => format!("{table}_data.csv"),
        OutputFormat::Json => format!("{table}_data.json"),
    }
}

/// Render records as one text blob in the requested format.
///
/// SQL statements are joined with newlines; empty input renders as empty
/// text in every format.
pub fn render_records(
    records: &[Record],
    table: &str,
    format: OutputFormat,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Sql => {
            let statements = to_sql_inserts(records, table);
            if statements.is_empty() {
                Ok(String::new())
            } else {
                Ok(statements.join("\n") + "\n")
            }
        }
        OutputFormat::Csv => to_csv(records),
        OutputFormat::Json => to_json(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_filenames() {
        assert_eq!(output_filename("users", OutputFormat::Sql), "users_inserts.sql");
        assert_eq!(output_filename("orders", OutputFormat::Csv), "orders_data.csv");
        assert_eq!(
            output_filename("products", OutputFormat::Json),
            "products_data.json"
        );
    }

    #[test]
    fn test_render_sql_joins_statements() {
        let records = vec![
            Record::builder().field("id", 1i64).build(),
            Record::builder().field("id", 2i64).build(),
        ];

        let text = render_records(&records, "t", OutputFormat::Sql).unwrap();
        assert_eq!(
            text,
            "INSERT INTO t (id) VALUES (1);\nINSERT INTO t (id) VALUES (2);\n"
        );
    }

    #[test]
    fn test_render_empty_input() {
        for format in [OutputFormat::Sql, OutputFormat::Csv] {
            assert_eq!(render_records(&[], "t", format).unwrap(), "");
        }
        assert_eq!(render_records(&[], "t", OutputFormat::Json).unwrap(), "[]");
    }
}
