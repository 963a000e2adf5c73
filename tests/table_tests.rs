//! End-to-end tests for layered table construction

use layered_table::{coerce, Error, LayeredTable, Value};
use similar_asserts::assert_eq;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write source");
    path
}

#[test]
fn test_default_overridden_by_environment() {
    let tmp = TempDir::new().expect("tmp");
    let a = source(&tmp, "a.csv", "key,value\nhost,default.com\nport,3000\ndebug,false\n");
    let b = source(&tmp, "b.csv", "key,value\nhost,override.com\ntimeout,30\n");

    let table = LayeredTable::load([&a, &b]).expect("load");

    let expected: HashMap<&str, Value> = HashMap::from([
        ("host", Value::from("override.com")),
        ("port", Value::from("3000")),
        ("debug", Value::Bool(false)),
        ("timeout", Value::from("30")),
    ]);
    let actual: HashMap<&str, Value> =
        table.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_empty_cell_is_null_not_absent() {
    let tmp = TempDir::new().expect("tmp");
    let a = source(&tmp, "a.csv", "key,value\nempty,\n");

    let table = LayeredTable::load([&a]).expect("load");
    assert_eq!(table.get("empty"), Some(&Value::Null));
    assert_eq!(table.get("missing"), None);
}

#[test]
fn test_missing_and_null_sources_are_tolerated() {
    let tmp = TempDir::new().expect("tmp");
    let valid = source(&tmp, "valid.csv", "key,value\nname,app\nverbose,no\n");
    let missing = tmp.path().join("local.csv");

    let baseline = LayeredTable::load([&valid]).expect("load");
    assert_eq!(LayeredTable::load([&missing, &valid]).expect("load"), baseline);
    assert_eq!(LayeredTable::from_sources([None, Some(&valid), None]).expect("load"), baseline);
}

#[test]
fn test_strict_fetch() {
    let tmp = TempDir::new().expect("tmp");
    let a = source(&tmp, "a.csv", "key,value\nnothing,null\n");
    let table = LayeredTable::load([&a]).expect("load");
    let x = Value::from("x");

    assert!(matches!(table.fetch("missing"), Err(Error::KeyNotFound { ref key }) if key == "missing"));
    assert_eq!(table.fetch_or("missing", &x), &x);
    assert_eq!(table.fetch_or("nothing", &x), &Value::Null);
}

#[test]
fn test_parse_error_propagates_from_first_bad_source() {
    let tmp = TempDir::new().expect("tmp");
    let first = source(&tmp, "first.csv", "key,value\na,\"b\"c\n");
    let second = source(&tmp, "second.csv", "key,value\na,\"open\n");

    match LayeredTable::load([&first, &second]) {
        Err(Error::Parse { path, line, .. }) => {
            assert_eq!(path, first);
            assert_eq!(line, 2);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_coercion_round_trip_through_files() {
    let tmp = TempDir::new().expect("tmp");
    let a = source(&tmp, "a.csv", "key,value\nt,TRUE\nf,No\nn,N/A\n");
    let table = LayeredTable::load([&a]).expect("load");

    let rendered = table.transform(|k, v| format!("{k},{v}"));
    let mut body = String::from("key,value\n");
    for line in &rendered {
        body.push_str(line);
        body.push('\n');
    }
    let b = source(&tmp, "b.csv", &body);

    assert_eq!(LayeredTable::load([&b]).expect("reload"), table);
    assert_eq!(coerce(Some("True")), Value::Bool(true));
}
