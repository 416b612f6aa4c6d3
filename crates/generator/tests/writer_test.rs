//! Integration tests for the output writer's overwrite policy

use swaggerwiz_generator::{write_document, WriteOutcome};
use tempfile::TempDir;

#[test]
fn test_write_to_fresh_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.json");

    let outcome = write_document(&path, "{\"swagger\":\"2.0\"}", false).unwrap();
    assert_eq!(outcome, WriteOutcome::Written);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "{\"swagger\":\"2.0\"}"
    );
}

#[test]
fn test_existing_output_is_not_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.json");

    let first = write_document(&path, "first run", false).unwrap();
    assert_eq!(first, WriteOutcome::Written);

    // Second run must not touch the file and must not fail
    let second = write_document(&path, "second run", false).unwrap();
    assert_eq!(second, WriteOutcome::SkippedExisting);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first run");
}

#[test]
fn test_force_overwrites_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.yaml");

    write_document(&path, "first run", false).unwrap();
    let outcome = write_document(&path, "second run", true).unwrap();
    assert_eq!(outcome, WriteOutcome::Written);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second run");
}

#[test]
fn test_unwritable_path_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing-dir").join("out.json");

    let result = write_document(&path, "content", false);
    assert!(result.is_err());
}
