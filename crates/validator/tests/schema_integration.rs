//! Integration tests for declarative constraint schemas over JSON documents.

#![cfg(feature = "schema")]

use gauge_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

const SCHEMA: &str = r#"{
    "name":      [{ "constraint": "byte_size", "min": 3, "max": 6 }],
    "kana":      [{ "constraint": "byte_size", "min": 3, "max": 6, "encoding": "shift_jis" }],
    "tags":      [{ "constraint": "byte_size", "max": 4 }],
    "starts_at": [
        { "constraint": "after",  "date": "2016-01-01T00:00:00Z" },
        { "constraint": "before", "date": "2017-01-01T00:00:00Z" }
    ],
    "/address/zip": [{ "constraint": "byte_size", "min": 7, "max": 8 }]
}"#;

fn schema() -> CompiledSchema {
    ConstraintSchema::from_json_str(SCHEMA)
        .unwrap()
        .compile()
        .unwrap()
}

fn failing_paths(errors: &ValidationErrors) -> Vec<&str> {
    errors
        .violations()
        .iter()
        .filter_map(|e| e.field.as_deref())
        .collect()
}

#[test]
fn valid_document() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let document = json!({
        "name": "ああ",
        "kana": "あいう",
        "tags": ["abc", "あ", null],
        "starts_at": "2016-06-01T12:00:00+09:00",
        "address": { "zip": "123-4567" }
    });
    assert!(schema().validate(&document).is_ok());
}

#[test]
fn missing_and_null_members_are_valid() {
    assert!(schema().validate(&json!({})).is_ok());
    assert!(schema().validate(&json!({ "name": null, "address": null })).is_ok());
}

#[test]
fn every_violation_is_reported_with_its_path() {
    let document = json!({
        "name": "aa",
        "kana": "ああああ",
        "tags": ["abcd", "abcde", "ああ"],
        "starts_at": "2017-01-01T00:00:00Z",
        "address": { "zip": "123" }
    });

    let errors = schema().validate(&document).unwrap_err();
    assert_eq!(
        failing_paths(&errors),
        vec!["name", "kana", "tags[1]", "tags[2]", "starts_at", "/address/zip"]
    );

    let starts_at = errors
        .violations()
        .into_iter()
        .find(|e| e.field.as_deref() == Some("starts_at"))
        .unwrap();
    assert_eq!(starts_at.code, "before");
}

#[test]
fn wrong_member_types() {
    let document = json!({
        "name": 12,
        "tags": "not-a-list-but-a-short-string",
        "starts_at": { "at": "2016-06-01" }
    });

    let errors = schema().validate(&document).unwrap_err();
    let codes: Vec<(&str, &str)> = errors
        .violations()
        .iter()
        .map(|e| (e.field.as_deref().unwrap_or(""), e.code.as_ref()))
        .collect();

    // a bare string is evaluated directly, not as a list
    assert_eq!(
        codes,
        vec![
            ("name", "type_mismatch"),
            ("tags", "byte_size"),
            ("starts_at", "type_mismatch"),
            ("starts_at", "type_mismatch"),
        ]
    );
}

#[test]
fn unparsable_temporal_member() {
    let errors = schema()
        .validate(&json!({ "starts_at": "next tuesday" }))
        .unwrap_err();

    // both constraints on the member fail to read it
    assert_eq!(errors.len(), 2);
    assert!(errors.errors().iter().all(|e| e.code == "invalid_format"));
}

#[test]
fn bad_declaration_fails_compilation() {
    let schema = ConstraintSchema::from_json_str(
        r#"{ "due": [{ "constraint": "before", "date": "31/12/2016", "format": "%Y-%m-%d" }] }"#,
    )
    .unwrap();

    let err = schema.compile().unwrap_err();
    assert_eq!(err.constraint(), "before");
    assert_eq!(err.field(), Some("due"));
    assert_eq!(
        err.cause().to_string(),
        "date[31/12/2016] could not be parsed with format[%Y-%m-%d]."
    );
}

#[test]
fn unknown_parameters_are_rejected() {
    let result = ConstraintSchema::from_json_str(
        r#"{ "name": [{ "constraint": "byte_size", "maximum": 3 }] }"#,
    );
    assert!(result.is_err());
}

#[test]
fn json_report() {
    let report = schema().report(&json!({ "name": "a", "tags": ["ok", "too long"] }));

    assert_eq!(report["valid"], false);
    assert_eq!(
        report["violations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| (v["field"].as_str().unwrap(), v["params"]["actual"].as_str().unwrap()))
            .collect::<Vec<_>>(),
        vec![("name", "1"), ("tags[1]", "8")]
    );
    assert_eq!(schema().report(&json!({}))["valid"], true);
}
