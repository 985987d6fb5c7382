//! Property-based tests for entry naming and extraction safety.
//!
//! These tests use proptest to generate arbitrary inputs and verify the
//! naming and path properties hold across a wide range of cases.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use artipack_core::EntryPathPolicy;
use artipack_core::archive_directory;
use artipack_core::copy::CopyBuffer;
use artipack_core::copy::copy_with_buffer;
use artipack_core::extract;
use artipack_core::list_entries;
use artipack_core::security::resolve_entry_path;
use artipack_core::types::EntryName;
use artipack_core::types::SourceRoot;
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::io::Cursor;
use std::path::Component;
use std::path::PathBuf;
use tempfile::TempDir;

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Entry names are `/`-separated, relative, and only directories end in `/`.
    #[test]
    fn prop_entry_names_are_portable(
        components in prop::collection::vec(segment(), 1..6),
        is_dir in any::<bool>()
    ) {
        let temp = TempDir::new().expect("failed to create temp dir");
        let root = SourceRoot::directory(temp.path()).unwrap();
        let mut full = root.as_path().to_path_buf();
        for c in &components {
            full.push(c);
        }

        let name = root.entry_name(&full, is_dir).unwrap();
        let expected = if is_dir {
            format!("{}/", components.join("/"))
        } else {
            components.join("/")
        };
        prop_assert_eq!(name.as_str(), expected.as_str());
        prop_assert!(!name.as_str().starts_with('/'));
        prop_assert!(!name.as_str().contains('\\'));
        prop_assert_eq!(name.is_dir(), is_dir);
    }

    /// Any name with a `..` component is rejected by default.
    #[test]
    fn prop_parent_traversal_rejected(
        prefix in prop::collection::vec(segment(), 0..4),
        suffix in prop::collection::vec(segment(), 1..4)
    ) {
        let mut parts = prefix;
        parts.push("..".to_string());
        parts.extend(suffix);
        let name = EntryName::new(parts.join("/"));

        let result = resolve_entry_path(&name, EntryPathPolicy::Reject);
        prop_assert!(result.is_err(), "name with .. should be rejected");
    }

    /// Sanitized paths are always relative and free of `..`.
    #[test]
    fn prop_sanitized_paths_stay_inside(
        parts in prop::collection::vec(
            prop_oneof![segment(), Just("..".to_string()), Just(".".to_string()), Just(String::new())],
            1..8
        ),
        leading_slash in any::<bool>()
    ) {
        let raw = parts.join("/");
        let raw = if leading_slash { format!("/{raw}") } else { raw };
        let name = EntryName::new(raw);

        if let Some(path) = resolve_entry_path(&name, EntryPathPolicy::Sanitize).unwrap() {
            prop_assert!(path.is_relative());
            prop_assert!(path.components().all(|c| matches!(c, Component::Normal(_))));
        }
    }

    /// Valid relative names resolve to themselves under every checked policy.
    #[test]
    fn prop_valid_names_resolve_unchanged(
        components in prop::collection::vec(segment(), 1..5)
    ) {
        let joined = components.join("/");
        let name = EntryName::new(joined.clone());
        for policy in [EntryPathPolicy::Reject, EntryPathPolicy::Sanitize] {
            let resolved = resolve_entry_path(&name, policy).unwrap();
            prop_assert_eq!(resolved, Some(PathBuf::from(&joined)));
        }
    }

    /// Buffered copy transfers every byte whatever the buffer size.
    #[test]
    fn prop_copy_preserves_bytes(
        data in prop::collection::vec(any::<u8>(), 0..4096),
        buffer_size in 1usize..512
    ) {
        let mut input = Cursor::new(data.clone());
        let mut output = Vec::new();
        let mut buffer = CopyBuffer::with_size(buffer_size);

        let copied = copy_with_buffer(&mut input, &mut output, &mut buffer).unwrap();
        prop_assert_eq!(copied, data.len() as u64);
        prop_assert_eq!(output, data);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Archiving then extracting reproduces every relative path and byte.
    #[test]
    fn prop_round_trip_reproduces_tree(
        files in prop::collection::btree_map(
            prop::collection::vec("[a-z]{1,6}", 1..4),
            prop::collection::vec(any::<u8>(), 0..2048),
            1..8
        )
    ) {
        let temp = TempDir::new().expect("failed to create temp dir");
        let src = temp.path().join("src");
        fs::create_dir(&src).unwrap();

        // Generated paths may collide with each other as file vs directory;
        // keep the first claim on each prefix.
        let mut written: BTreeMap<String, Vec<u8>> = BTreeMap::new();
        for (components, data) in files {
            let rel = format!("f_{}", components.join("/d_"));
            let path = src.join(&rel);
            if path.parent().is_some_and(|p| p.is_file()) || path.exists() {
                continue;
            }
            if fs::create_dir_all(path.parent().unwrap()).is_err() {
                continue;
            }
            fs::write(&path, &data).unwrap();
            written.insert(rel, data);
        }

        let archive = temp.path().join("out.zip");
        archive_directory(&archive, &src).unwrap();

        let names = list_entries(&archive).unwrap();
        for rel in written.keys() {
            prop_assert!(names.contains(rel), "missing entry {}", rel);
        }

        let dest = temp.path().join("dest");
        extract(&archive, &dest).unwrap();
        for (rel, data) in &written {
            prop_assert_eq!(&fs::read(dest.join(rel)).unwrap(), data);
        }
    }
}
