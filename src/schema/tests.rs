use super::*;
use crate::reader::ReaderError;
use crate::tokenizer::LineTokenizer;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_schema_from_fields() {
    let mut tokenizer = LineTokenizer::new();
    let schema = ColumnSchema::from_fields(&tokenizer.tokenize("  PRI.Psi\tpi.1   wattTheta.1 \n"));
    assert_eq!(schema.len(), 3);
    assert_eq!(schema.names(), ["PRI.Psi", "pi.1", "wattTheta.1"]);
    assert_eq!(schema.to_string(), "PRI.Psi\tpi.1\twattTheta.1");
}

#[test]
fn test_schema_equality_is_order_sensitive() {
    let a = ColumnSchema::new(["x", "y"]);
    assert_eq!(a, ColumnSchema::new(["x", "y"]));
    assert_ne!(a, ColumnSchema::new(["y", "x"]));
    assert_ne!(a, ColumnSchema::new(["x", "y", "z"]));
}

#[test]
fn test_index_map_resolves_by_name() {
    let observed = ColumnSchema::new(["pi.1", "wattTheta.1"]);
    let simulated = ColumnSchema::new(["PRI.Psi", "wattTheta.1", "PRI.omega", "pi.1"]);

    let map = ColumnIndexMap::build(&observed, &simulated).unwrap();
    assert_eq!(map.indices(), [3, 1]);
    assert_eq!(map.len(), 2);
}

#[test]
fn test_index_map_missing_column() {
    let observed = ColumnSchema::new(["a", "z"]);
    let simulated = ColumnSchema::new(["a", "b"]);

    let err = ColumnIndexMap::build(&observed, &simulated).unwrap_err();
    assert!(matches!(err, SchemaError::MissingColumn(ref name) if name == "z"));
    assert!(err.to_string().contains("'z'"));
}

#[test]
fn test_index_map_duplicate_column() {
    let observed = ColumnSchema::new(["a"]);
    let simulated = ColumnSchema::new(["a", "b", "a"]);

    let err = ColumnIndexMap::build(&observed, &simulated).unwrap_err();
    assert!(matches!(err, SchemaError::DuplicateColumn(ref name) if name == "a"));
}

#[test]
fn test_extract_follows_strtod_prefix_rules() {
    let observed = ColumnSchema::new(["a", "b", "c", "d"]);
    let simulated = ColumnSchema::new(["p", "a", "b", "c", "d"]);
    let map = ColumnIndexMap::build(&observed, &simulated).unwrap();

    let mut tokenizer = LineTokenizer::new();
    let mut values = Vec::new();
    let invalid = map.extract(&tokenizer.tokenize("9 1.5e abc -2 3e2x"), &mut values);

    assert_eq!(invalid, 1);
    assert_eq!(values, vec![1.5, 0.0, -2.0, 300.0]);
}

#[test]
fn test_extract_reuses_buffer() {
    let observed = ColumnSchema::new(["a"]);
    let map = ColumnIndexMap::build(&observed, &observed).unwrap();

    let mut tokenizer = LineTokenizer::new();
    let mut values = vec![7.0, 8.0, 9.0];
    assert_eq!(map.extract(&tokenizer.tokenize("4.25"), &mut values), 0);
    assert_eq!(values, vec![4.25]);
}

#[test]
fn test_validate_identical_headers() {
    let dir = tempdir().unwrap();
    let a = write(&dir, "a.txt", "p s\n1 2\n");
    let b = write(&dir, "b.txt", "p\ts\n3 4\n");

    let mut tokenizer = LineTokenizer::new();
    let schema = validate_simulated_headers(&[a, b], &mut tokenizer).unwrap();
    assert_eq!(schema, ColumnSchema::new(["p", "s"]));
}

#[test]
fn test_validate_header_mismatch_names_both_files() {
    let dir = tempdir().unwrap();
    let a = write(&dir, "a.txt", "p s\n1 2\n");
    let b = write(&dir, "b.txt", "p s\n1 2\n");
    let c = write(&dir, "c.txt", "p t\n1 2\n");

    let mut tokenizer = LineTokenizer::new();
    let err = validate_simulated_headers(&[&a, &b, &c], &mut tokenizer).unwrap_err();
    match &err {
        SchemaError::HeaderMismatch { first, other } => {
            assert_eq!(first, &a);
            assert_eq!(other, &c);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().ends_with("have different headers"));
}

#[test]
fn test_validate_requires_files() {
    let mut tokenizer = LineTokenizer::new();
    let paths: [PathBuf; 0] = [];
    assert!(matches!(
        validate_simulated_headers(&paths, &mut tokenizer),
        Err(SchemaError::NoSimulatedFiles)
    ));
}

#[test]
fn test_validate_empty_file() {
    let dir = tempdir().unwrap();
    let a = write(&dir, "a.txt", "");

    let mut tokenizer = LineTokenizer::new();
    let err = validate_simulated_headers(&[a], &mut tokenizer).unwrap_err();
    assert!(matches!(err, SchemaError::Reader(ReaderError::Empty(_))));
    assert!(err.to_string().starts_with("found no lines in"));
}
