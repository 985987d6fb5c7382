//! Path traversal integration tests.
//!
//! Replays "zip slip" style archives against every entry name policy.

#![allow(clippy::unwrap_used)]

use artipack_core::ArchiveError;
use artipack_core::EntryPathPolicy;
use artipack_core::Extractor;
use artipack_core::test_utils::ZipTestBuilder;
use artipack_core::test_utils::create_test_zip;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

const MALICIOUS_NAMES: &[&str] = &[
    "../etc/passwd",
    "../../etc/passwd",
    "foo/../../etc/passwd",
    "foo/../../../etc/passwd",
    "/etc/passwd",
    "/../../etc/passwd",
];

#[test]
fn test_zip_slip_rejected() {
    for &name in MALICIOUS_NAMES {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("a/b/c/dest");
        let data = create_test_zip(vec![(name, b"root::0:0")]);

        let err = Extractor::new()
            .extract_from_stream(Cursor::new(data), &dest)
            .unwrap_err();

        assert!(
            matches!(&err, ArchiveError::PathTraversal { entry } if entry == name),
            "entry should be rejected: {name}"
        );
        assert!(!temp.path().join("a/b/etc/passwd").exists());
        assert!(!temp.path().join("a/etc/passwd").exists());
    }
}

#[test]
fn test_zip_slip_sanitized_into_destination() {
    for &name in MALICIOUS_NAMES {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("a/b/c/dest");
        let data = create_test_zip(vec![(name, b"root::0:0")]);

        Extractor::new()
            .entry_paths(EntryPathPolicy::Sanitize)
            .extract_from_stream(Cursor::new(data), &dest)
            .unwrap();

        let landed = if name.starts_with("foo/") {
            dest.join("foo/etc/passwd")
        } else {
            dest.join("etc/passwd")
        };
        assert_eq!(fs::read(&landed).unwrap(), b"root::0:0", "entry {name}");
    }
}

#[test]
fn test_rejection_stops_before_later_entries() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("dest");
    let data = ZipTestBuilder::new()
        .add_file("before.txt", b"1")
        .add_file("../evil.txt", b"2")
        .add_file("after.txt", b"3")
        .build();

    Extractor::new()
        .extract_from_stream(Cursor::new(data), &dest)
        .unwrap_err();

    assert!(dest.join("before.txt").exists());
    assert!(!dest.join("after.txt").exists());
    assert!(!temp.path().join("evil.txt").exists());
}

#[test]
fn test_directory_entry_traversal_rejected() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("dest");
    let data = ZipTestBuilder::new().add_directory("../outside/").build();

    let err = Extractor::new()
        .extract_from_stream(Cursor::new(data), &dest)
        .unwrap_err();
    assert!(err.is_security_violation());
    assert!(!temp.path().join("outside").exists());
}

#[test]
fn test_names_without_components_skipped_when_sanitizing() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("dest");
    let data = ZipTestBuilder::new()
        .add_directory("../")
        .add_file("ok.txt", b"fine")
        .build();

    let report = Extractor::new()
        .entry_paths(EntryPathPolicy::Sanitize)
        .extract_from_stream(Cursor::new(data), &dest)
        .unwrap();

    assert_eq!(report.entries_skipped, 1);
    assert_eq!(report.files_extracted, 1);
    assert!(report.has_warnings());
}

#[test]
fn test_unchecked_keeps_historical_concatenation() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("dest");
    let data = create_test_zip(vec![("/abs.txt", b"a"), ("../up.txt", b"u")]);

    Extractor::new()
        .entry_paths(EntryPathPolicy::Unchecked)
        .extract_from_stream(Cursor::new(data), &dest)
        .unwrap();

    assert!(dest.join("abs.txt").is_file());
    assert!(temp.path().join("up.txt").is_file());
}
