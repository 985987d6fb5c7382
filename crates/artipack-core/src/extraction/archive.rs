//! Extraction from seekable input.
//!
//! Entry sizes are taken from the central directory, so archives whose local
//! headers defer sizes to a data descriptor extract as well as any other.
//! Entries are still opened one at a time in directory order and copied
//! through the transfer buffer.

use std::io::Read;
use std::io::Seek;
use std::path::Path;

use zip::ZipArchive;

use crate::ArchiveError;
use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::Result;
use crate::extraction::sink::EntrySink;
use crate::types::EntryName;

/// Extracts every entry of the seekable ZIP `reader` below `extract_dir`.
///
/// `extract_dir` and any missing ancestors are created before the archive is
/// read. Entry handling is the same as for
/// [`extract_from_stream`](crate::extraction::stream::extract_from_stream).
///
/// # Errors
///
/// - [`ArchiveError::DirectoryCreation`] if `extract_dir` or a directory an
///   entry needs cannot be created.
/// - [`ArchiveError::ArchiveRead`] if the central directory, a header or a
///   payload cannot be read.
/// - [`ArchiveError::PathTraversal`] if an entry name is rejected by
///   [`EntryPathPolicy::Reject`](crate::EntryPathPolicy::Reject).
/// - [`ArchiveError::FileWrite`] if an output file cannot be written.
pub fn extract_from_archive<R: Read + Seek>(
    reader: R,
    extract_dir: &Path,
    config: &ExtractionConfig,
) -> Result<ExtractionReport> {
    let mut sink = EntrySink::new(extract_dir, config)?;
    let mut archive = ZipArchive::new(reader).map_err(ArchiveError::archive_read)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(ArchiveError::archive_read)?;
        let name = EntryName::new(entry.name());
        let unix_mode = entry.unix_mode();
        sink.write_entry(&name, unix_mode, &mut entry)?;
    }

    Ok(sink.finish())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::EntryPathPolicy;
    use crate::test_utils::ZipTestBuilder;
    use crate::test_utils::create_test_zip;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn streamed_sample() -> Vec<u8> {
        ZipTestBuilder::new()
            .add_directory("sub/")
            .add_file("sub/file2.txt", b"world")
            .add_deflated_file("file1.txt", b"hello")
            .build_streamed()
    }

    #[test]
    fn test_data_descriptor_entries_extracted() {
        let temp = TempDir::new().unwrap();
        let report = extract_from_archive(
            Cursor::new(streamed_sample()),
            temp.path(),
            &ExtractionConfig::default(),
        )
        .unwrap();

        assert_eq!(report.files_extracted, 2);
        assert_eq!(report.directories_created, 1);
        assert_eq!(report.bytes_written, 10);
        assert_eq!(fs::read_to_string(temp.path().join("file1.txt")).unwrap(), "hello");
        assert_eq!(fs::read_to_string(temp.path().join("sub/file2.txt")).unwrap(), "world");
    }

    #[test]
    fn test_local_header_sizes_extracted() {
        let data = create_test_zip(vec![("a/b.txt", b"one"), ("c.txt", b"two")]);
        let temp = TempDir::new().unwrap();

        extract_from_archive(Cursor::new(data), temp.path(), &ExtractionConfig::default())
            .unwrap();
        assert_eq!(fs::read(temp.path().join("a/b.txt")).unwrap(), b"one");
        assert_eq!(fs::read(temp.path().join("c.txt")).unwrap(), b"two");
    }

    #[test]
    fn test_traversal_rejected() {
        let data = ZipTestBuilder::new()
            .add_file("../escape.txt", b"evil")
            .build_streamed();
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("dest");

        let err = extract_from_archive(Cursor::new(data), &dest, &ExtractionConfig::default())
            .unwrap_err();
        assert!(err.is_security_violation());
        assert!(!temp.path().join("escape.txt").exists());
    }

    #[test]
    fn test_traversal_sanitized() {
        let data = ZipTestBuilder::new()
            .add_file("../escape.txt", b"evil")
            .build_streamed();
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("dest");
        let config = ExtractionConfig::default().with_entry_paths(EntryPathPolicy::Sanitize);

        extract_from_archive(Cursor::new(data), &dest, &config).unwrap();
        assert_eq!(fs::read(dest.join("escape.txt")).unwrap(), b"evil");
    }

    #[test]
    fn test_destination_created_before_reading() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("made/anyway");

        let err = extract_from_archive(
            Cursor::new(b"not an archive".to_vec()),
            &dest,
            &ExtractionConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ArchiveError::ArchiveRead { .. }));
        assert!(dest.is_dir());
    }
}
