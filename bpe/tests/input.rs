use std::fs;

use pairmerge::{read_text, BpeError, MergeConfig, Merger};
use tempfile::tempdir;

#[test]
fn test_read_text_and_merge() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("text.txt");
    fs::write(&path, "low lower lowest").unwrap();

    let text = read_text(&path).unwrap();
    let outcome = Merger::new(MergeConfig::new(5).unwrap()).run(&text).unwrap();

    assert!(outcome.is_complete());
    assert_eq!(outcome.input_len, 16);
    // "lo" occurs three times and wins round one.
    assert_eq!(outcome.vocab.get(256), Some((108, 111)));
}

#[test]
fn test_read_text_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    match read_text(&path) {
        Err(BpeError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
