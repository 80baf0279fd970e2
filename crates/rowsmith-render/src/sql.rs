//! SQL INSERT statement rendering.

use rowsmith_core::{Record, Value, DATETIME_FORMAT};

/// Convert records to SQL INSERT statements, one per record.
///
/// The column list comes from the first record's field order and is
/// applied to every statement. Empty input yields an empty vector.
///
/// Literal rendering:
/// - null -> `NULL`
/// - string -> single-quoted, embedded single quotes doubled
/// - timestamp -> single-quoted `YYYY-MM-DD HH:MM:SS`
/// - integers and floats -> plain text, unquoted
pub fn to_sql_inserts(records: &[Record], table_name: &str) -> Vec<String> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    let columns: Vec<&str> = first.field_names().collect();
    let column_list = columns.join(", ");

    records
        .iter()
        .map(|record| {
            let values: Vec<String> = columns
                .iter()
                .map(|column| sql_literal(record.get(column).unwrap_or(&Value::Null)))
                .collect();
            format!(
                "INSERT INTO {table_name} ({column_list}) VALUES ({});",
                values.join(", ")
            )
        })
        .collect()
}

/// Render a single value as a SQL literal.
fn sql_literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Str(s) => format!("'{}'", s.replace('\'', "''")),
        Value::DateTime(dt) => format!("'{}'", dt.format(DATETIME_FORMAT)),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_literal_rendering() {
        assert_eq!(sql_literal(&Value::Null), "NULL");
        assert_eq!(sql_literal(&Value::Int(42)), "42");
        assert_eq!(sql_literal(&Value::Float(12.5)), "12.5");
        assert_eq!(sql_literal(&Value::Str("plain".into())), "'plain'");

        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        assert_eq!(sql_literal(&Value::DateTime(dt)), "'2024-03-15 09:30:00'");
    }

    #[test]
    fn test_single_quotes_are_doubled() {
        assert_eq!(
            sql_literal(&Value::Str("O'Brien".into())),
            "'O''Brien'"
        );
        assert_eq!(sql_literal(&Value::Str("it's 'x'".into())), "'it''s ''x'''");
    }

    #[test]
    fn test_insert_statement_shape() {
        let records = vec![
            Record::builder().field("id", 1i64).field("name", "Alice").build(),
            Record::builder().field("id", 2i64).field("name", "Bob").build(),
        ];

        let statements = to_sql_inserts(&records, "users");

        assert_eq!(statements.len(), 2);
        assert_eq!(
            statements[0],
            "INSERT INTO users (id, name) VALUES (1, 'Alice');"
        );
        assert_eq!(
            statements[1],
            "INSERT INTO users (id, name) VALUES (2, 'Bob');"
        );
    }

    #[test]
    fn test_column_order_from_first_record() {
        let records = vec![Record::builder()
            .field("b", 2i64)
            .field("a", 1i64)
            .build()];

        let statements = to_sql_inserts(&records, "t");
        assert!(statements[0].starts_with("INSERT INTO t (b, a) VALUES"));
    }

    #[test]
    fn test_null_renders_unquoted() {
        let records = vec![Record::builder()
            .field("id", 1i64)
            .field("reason", Value::Null)
            .build()];

        let statements = to_sql_inserts(&records, "payments");
        assert_eq!(
            statements[0],
            "INSERT INTO payments (id, reason) VALUES (1, NULL);"
        );
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(to_sql_inserts(&[], "users").is_empty());
    }
}
