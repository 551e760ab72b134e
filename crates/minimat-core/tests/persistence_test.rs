//! Integration tests for `save` / `load` through the interpreter and the
//! CSV codec.

use std::fs;

use minimat_core::{csv, Error, Interpreter, Outcome, Vector3, VectorStore};
use tempfile::TempDir;

fn sample_store() -> VectorStore {
    let mut store = VectorStore::new();
    store.set("a", Vector3::new(1.0, 2.0, 3.0)).unwrap();
    store.set("velocity_2", Vector3::new(-0.125, 1e-7, 12345.678901)).unwrap();
    store.set("B", Vector3::new(1.0 / 3.0, -2.0 / 3.0, 0.0)).unwrap();
    store
}

/// save -> clear -> load reproduces names, order and values to 1e-6
#[test]
fn test_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("vectors.csv");

    let original = sample_store();
    let written = csv::save(&original, &path).unwrap();
    assert_eq!(written, 3);

    let mut restored = original.clone();
    restored.clear();
    let report = csv::load(&mut restored, &path).unwrap();

    assert_eq!(report.loaded, 3);
    assert!(report.skipped.is_empty());
    assert_eq!(restored.len(), original.len());

    for (before, after) in original.iter().zip(restored.iter()) {
        assert_eq!(before.name, after.name);
        for (x, y) in before.value.to_array().into_iter().zip(after.value.to_array()) {
            assert!((x - y).abs() <= 1e-6, "{}: {x} vs {y}", before.name);
        }
    }
}

#[test]
fn test_save_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.csv");

    let mut store = VectorStore::new();
    store.set("a", Vector3::new(1.0, 2.0, 3.0)).unwrap();
    store.set("b", Vector3::new(-0.5, 0.0, 10.25)).unwrap();
    csv::save(&store, &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "a,1.000000,2.000000,3.000000\nb,-0.500000,0.000000,10.250000\n"
    );
}

#[test]
fn test_save_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.csv");
    fs::write(&path, "stale,9,9,9\nmore,stale,lines\n").unwrap();

    let mut store = VectorStore::new();
    store.set("fresh", Vector3::new(1.0, 1.0, 1.0)).unwrap();
    csv::save(&store, &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "fresh,1.000000,1.000000,1.000000\n");
}

#[test]
fn test_save_to_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no_such_dir").join("out.csv");

    let store = sample_store();
    let err = csv::save(&store, &path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().starts_with("I/O error on "), "{err}");
    assert_eq!(store.len(), 3);
}

/// One good line and one bad line: exactly one entry, exactly one warning.
#[test]
fn test_load_skips_malformed_line() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("mixed.csv");
    fs::write(&path, "good,1,2,3\nthis is not a vector\n").unwrap();

    let mut store = VectorStore::new();
    let report = csv::load(&mut store, &path).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("good"), Some(Vector3::new(1.0, 2.0, 3.0)));
    assert_eq!(report.loaded, 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line_no, 2);
    assert_eq!(
        report.to_string(),
        "Warning: bad line ignored: this is not a vector"
    );
}

#[test]
fn test_load_continues_after_bad_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("messy.csv");
    let long_name = "x".repeat(40);
    let contents = format!(
        "first,1,0,0\r\n\n   \nbad name,1,2,3\n{long_name},1,2,3\nshort,1,2\nlast, 0, 0, 1\n"
    );
    fs::write(&path, contents).unwrap();

    let mut store = VectorStore::new();
    let report = csv::load(&mut store, &path).unwrap();

    let names: Vec<&str> = store.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["first", "last"]);
    assert_eq!(report.skipped.len(), 3);
    let lines: Vec<usize> = report.skipped.iter().map(|s| s.line_no).collect();
    assert_eq!(lines, [4, 5, 6]);
}

#[test]
fn test_load_clears_existing_entries() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("one.csv");
    fs::write(&path, "only,4,5,6\n").unwrap();

    let mut store = sample_store();
    csv::load(&mut store, &path).unwrap();

    assert_eq!(store.len(), 1);
    assert!(store.get("a").is_none());
}

#[test]
fn test_load_of_all_bad_lines_leaves_store_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.csv");
    fs::write(&path, "nope\n1,2\n").unwrap();

    let mut store = sample_store();
    let report = csv::load(&mut store, &path).unwrap();

    assert!(store.is_empty());
    assert_eq!(report.loaded, 0);
    assert_eq!(report.skipped.len(), 2);
}

#[test]
fn test_load_invalid_utf8_line_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bytes.csv");
    fs::write(&path, b"ok,1,1,1\n\xff\xfe,2,2,2\nok2,3,3,3\n").unwrap();

    let mut store = VectorStore::new();
    let report = csv::load(&mut store, &path).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(report.skipped.len(), 1);
}

#[test]
fn test_load_respects_capacity_limit() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("many.csv");
    fs::write(&path, "a,1,0,0\nb,2,0,0\nc,3,0,0\n").unwrap();

    let mut store = VectorStore::with_capacity_limit(2);
    let report = csv::load(&mut store, &path).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].reason.contains("storage full"));
}

#[test]
fn test_interpreter_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.csv");
    let path_str = path.display().to_string();

    let mut interp = Interpreter::default();
    interp.execute_line("a = 1 2 3").unwrap();
    interp.execute_line("b = a * 2").unwrap();

    let saved = interp.execute_line(&format!("save {path_str}")).unwrap();
    assert!(matches!(saved, Outcome::Saved { count: 2, .. }));
    assert_eq!(saved.to_string(), "");

    interp.execute_line("clear").unwrap();
    assert!(interp.store().is_empty());

    let loaded = interp.execute_line(&format!("load {path_str}")).unwrap();
    assert_eq!(loaded.to_string(), "");
    assert_eq!(
        interp.execute_line("b").unwrap().to_string(),
        "b = 2.000   4.000   6.000"
    );
}
