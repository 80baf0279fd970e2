//! Generator-to-serializer round trip tests.

use rowsmith_core::Value;
use rowsmith_generator::{RecordGenerator, UserField};
use rowsmith_render::{to_csv, to_json, to_sql_inserts};

#[test]
fn users_to_sql_produces_one_statement_per_record() {
    let mut generator = RecordGenerator::with_seed(42);
    let users = generator.users(10, None);

    let statements = to_sql_inserts(&users, "users");

    assert_eq!(statements.len(), 10);
    for statement in &statements {
        assert!(statement.starts_with("INSERT INTO users ("));
        assert!(statement.ends_with(");"));
        for column in ["id", "name", "email", "phone", "address", "created_at"] {
            assert!(
                statement.contains(column),
                "statement missing column {column}: {statement}"
            );
        }
    }
}

#[test]
fn embedded_single_quotes_are_doubled_in_sql() {
    // Person names routinely contain apostrophes; force one to be sure.
    let mut generator = RecordGenerator::with_seed(42);
    let mut users = generator.users(1, Some(&[UserField::Id, UserField::Name]));
    users[0].set("name", Value::Str("Miles O'Brien".to_string()));

    let statements = to_sql_inserts(&users, "users");
    assert!(statements[0].contains("'Miles O''Brien'"));
}

#[test]
fn id_and_name_scenario() {
    let mut generator = RecordGenerator::with_seed(7);
    let users = generator.users(3, Some(&[UserField::Id, UserField::Name]));

    assert_eq!(users.len(), 3);
    for (i, user) in users.iter().enumerate() {
        let names: Vec<&str> = user.field_names().collect();
        assert_eq!(names, vec!["id", "name"]);
        assert_eq!(user.get("id"), Some(&Value::Int(i as i64 + 1)));
    }

    let statements = to_sql_inserts(&users, "users");
    assert_eq!(statements.len(), 3);
    for (i, statement) in statements.iter().enumerate() {
        let prefix = format!("INSERT INTO users (id, name) VALUES ({}, '", i + 1);
        assert!(
            statement.starts_with(&prefix),
            "unexpected statement: {statement}"
        );
        assert!(statement.ends_with("');"));
    }
}

#[test]
fn products_to_csv_has_header_and_row_per_record() {
    let mut generator = RecordGenerator::with_seed(42);
    let products = generator.products(5);

    let csv = to_csv(&products).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "id,name,description,price,category,sku,stock_quantity,created_at"
    );
}

#[test]
fn payments_to_json_preserves_null_failure_reasons() {
    let mut generator = RecordGenerator::with_seed(42);
    let transactions =
        generator.payment_transactions(50, &rowsmith_generator::PaymentOptions::default());

    let json = to_json(&transactions).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let array = parsed.as_array().unwrap();

    assert_eq!(array.len(), 50);
    for entry in array {
        let status = entry["status"].as_str().unwrap();
        if status == "failed" {
            assert!(entry["failure_reason"].is_string());
        } else {
            assert!(entry["failure_reason"].is_null());
        }
    }
}

#[test]
fn empty_sequences_serialize_to_empty_output() {
    let mut generator = RecordGenerator::with_seed(42);
    let users = generator.users(0, None);

    assert!(to_sql_inserts(&users, "users").is_empty());
    assert_eq!(to_csv(&users).unwrap(), "");
    assert_eq!(to_json(&users).unwrap(), "[]");
}
