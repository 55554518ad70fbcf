//! End-to-end document scans through `SpellHandle`, with word lists and
//! documents written to temporary files.

use std::io::Write;

use tempfile::NamedTempFile;
use wordcheck::{CheckError, SpellHandle, Verdict};

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn handle(words: &str) -> (NamedTempFile, SpellHandle) {
    let list = temp_file(words);
    let handle = SpellHandle::from_path(list.path()).unwrap();
    (list, handle)
}

#[test]
fn count_exceeds_capacity() {
    let (_list, handle) = handle("ok\n");
    let n = 1500;
    let doc = temp_file(&"nope ".repeat(n));
    let report = handle.check_path(doc.path()).unwrap();
    assert_eq!(report.count, n);
    assert_eq!(report.misspelled.len(), 1000);
    assert!(report.is_truncated());
    assert!(report.misspelled.iter().all(|w| *w == "nope"));
}

#[test]
fn capacity_can_be_removed() {
    let (_list, mut handle) = handle("ok\n");
    handle.set_misspelled_capacity(None);
    let doc = temp_file(&"nope\n".repeat(1500));
    let report = handle.check_path(doc.path()).unwrap();
    assert_eq!(report.count, 1500);
    assert_eq!(report.misspelled.len(), 1500);
}

#[test]
fn duplicate_dictionary_entries_are_harmless() {
    let (_list, handle) = handle("ok\nok\nok\n");
    assert_eq!(handle.words().len(), 3);
    assert!(handle.spell("OK"));
}

#[test]
fn empty_word_list_loads() {
    let (_list, handle) = handle("");
    assert!(handle.words().is_empty());
    assert_eq!(handle.verdict("word"), Verdict::Unknown);
    assert_eq!(handle.verdict("42"), Verdict::Number);
}

#[test]
fn nonexistent_word_list_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let result = SpellHandle::from_path(dir.path().join("missing"));
    assert!(matches!(result, Err(CheckError::Dictionary(_))));
}

#[test]
fn non_utf8_document_is_checked_bytewise() {
    let (_list, handle) = handle("ok\n");
    let mut doc = NamedTempFile::new().unwrap();
    doc.write_all(b"ok caf\xE9s \xFF\xFE\n").unwrap();
    doc.flush().unwrap();
    let report = handle.check_path(doc.path()).unwrap();
    // "\xFF\xFE" has no word bytes and counts as punctuation
    assert_eq!(report.count, 1);
    assert_eq!(report.misspelled[0].as_bytes(), b"caf\xE9s");
}
