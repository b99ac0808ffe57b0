use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Fixture, InputError, load_fixtures, parse_fixtures};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("rouge_evalqc_input_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

#[test]
fn test_load_preserves_order_and_length() {
    let dir = make_temp_dir();
    let path = dir.join("test.json");
    write_file(
        &path,
        r#"[
            {"input": "first", "expected": "one"},
            {"input": "second", "expected": "two"},
            {"input": "third", "expected": "three", "note": "ignored"}
        ]"#,
    );

    let fixtures = load_fixtures(&path).unwrap();
    assert_eq!(fixtures.len(), 3);
    let inputs = fixtures.iter().map(|f| f.input.as_str()).collect::<Vec<_>>();
    assert_eq!(inputs, vec!["first", "second", "third"]);
    assert_eq!(fixtures[2].expected, "three");
}

#[test]
fn test_empty_array_is_valid() {
    let fixtures = parse_fixtures("[]", "inline").unwrap();
    assert!(fixtures.is_empty());
}

#[test]
fn test_missing_file_is_format_error() {
    let dir = make_temp_dir();
    let err = load_fixtures(&dir.join("absent.json")).unwrap_err();
    assert!(matches!(err, InputError::Format { .. }));
}

#[test]
fn test_malformed_json_is_format_error() {
    let err = parse_fixtures("[{\"input\": \"x\",", "inline").unwrap_err();
    assert!(matches!(err, InputError::Format { .. }));
}

#[test]
fn test_non_array_top_level_is_format_error() {
    let err = parse_fixtures(r#"{"input": "x", "expected": "y"}"#, "inline").unwrap_err();
    match err {
        InputError::Format { message, .. } => assert!(message.contains("an object")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_field_is_schema_error_with_index() {
    let err = parse_fixtures(
        r#"[{"input": "a", "expected": "b"}, {"input": "c"}]"#,
        "inline",
    )
    .unwrap_err();
    match err {
        InputError::Schema { index, message, .. } => {
            assert_eq!(index, 1);
            assert!(message.contains("expected"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_non_string_field_is_schema_error() {
    let err = parse_fixtures(r#"[{"input": 3, "expected": "b"}]"#, "inline").unwrap_err();
    assert!(matches!(err, InputError::Schema { index: 0, .. }));
}

#[test]
fn test_fixture_fields_round_through_parse() {
    let fixtures = parse_fixtures(r#"[{"input": "Hello", "expected": "Hello world"}]"#, "inline")
        .unwrap();
    assert_eq!(
        fixtures,
        vec![Fixture {
            input: "Hello".to_string(),
            expected: "Hello world".to_string(),
        }]
    );
}
