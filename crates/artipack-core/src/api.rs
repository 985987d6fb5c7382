//! High-level public API with default configuration.
//!
//! Each function here is a shortcut for the matching method on a
//! default-configured [`Archiver`] or [`Extractor`]. Listing functions are
//! re-exported from [`inspection`](crate::inspection) directly.

use std::io::Read;
use std::path::Path;

use crate::ExtractionReport;
use crate::Result;
use crate::creation::Archiver;
use crate::creation::CreationReport;
use crate::extraction::Extractor;

/// Archives everything below `source_dir` into a new ZIP file at
/// `destination`.
///
/// # Errors
///
/// Returns [`ArchiveError::InvalidInput`](crate::ArchiveError::InvalidInput)
/// if `source_dir` is not a directory and
/// [`ArchiveError::ArchiveWrite`](crate::ArchiveError::ArchiveWrite) on any
/// I/O failure.
///
/// # Examples
///
/// ```no_run
/// use artipack_core::archive_directory;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = archive_directory("results.zip", "target/test-results")?;
/// println!("Archived {} files", report.files_added);
/// # Ok(())
/// # }
/// ```
pub fn archive_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    destination: P,
    source_dir: Q,
) -> Result<CreationReport> {
    Archiver::new().archive_directory(destination, source_dir)
}

/// Archives the single file `from` into a new ZIP file at `to`.
///
/// The archive holds one entry named after the file.
///
/// # Errors
///
/// Returns [`ArchiveError::InvalidInput`](crate::ArchiveError::InvalidInput)
/// if `from` is not a regular file and
/// [`ArchiveError::ArchiveWrite`](crate::ArchiveError::ArchiveWrite) on any
/// I/O failure.
pub fn archive_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<CreationReport> {
    Archiver::new().archive_file(from, to)
}

/// Extracts the ZIP file at `archive_path` into `extract_dir`.
///
/// Entry names that would escape `extract_dir` fail the extraction. Entries
/// are located through the central directory.
///
/// # Errors
///
/// See [`Extractor::extract`].
///
/// # Examples
///
/// ```no_run
/// use artipack_core::extract;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = extract("results.zip", "/tmp/restored")?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    extract_dir: Q,
) -> Result<ExtractionReport> {
    Extractor::new().extract(archive_path, extract_dir)
}

/// Extracts the ZIP stream `reader` into `extract_dir`.
///
/// Entries are read from their local headers, so an entry whose sizes were
/// deferred to a data descriptor fails with
/// [`ArchiveError::ArchiveRead`](crate::ArchiveError::ArchiveRead). Use
/// [`extract`] for archives on disk.
///
/// # Errors
///
/// See [`Extractor::extract_from_stream`].
pub fn extract_from_stream<R: Read, Q: AsRef<Path>>(
    reader: R,
    extract_dir: Q,
) -> Result<ExtractionReport> {
    Extractor::new().extract_from_stream(reader, extract_dir)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::inspection::list_entries;
    use crate::test_utils::create_test_tree;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_archive_list_extract() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("root");
        create_test_tree(&src, &[("file1.txt", b"hello"), ("sub/file2.txt", b"world")]);
        let archive = temp.path().join("out.zip");

        archive_directory(&archive, &src).unwrap();

        let mut names = list_entries(&archive).unwrap();
        names.sort();
        assert_eq!(names, vec!["file1.txt", "sub/", "sub/file2.txt"]);

        let dest = temp.path().join("dest");
        extract(&archive, &dest).unwrap();
        assert_eq!(fs::read_to_string(dest.join("file1.txt")).unwrap(), "hello");
        assert_eq!(fs::read_to_string(dest.join("sub/file2.txt")).unwrap(), "world");
    }

    #[test]
    fn test_archive_file_then_stream_extract() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("notes.txt");
        fs::write(&from, "single").unwrap();
        let archive = temp.path().join("notes.zip");

        archive_file(&from, &archive).unwrap();

        let dest = temp.path().join("dest");
        extract_from_stream(fs::File::open(&archive).unwrap(), &dest).unwrap();
        assert_eq!(fs::read_to_string(dest.join("notes.txt")).unwrap(), "single");
    }
}
