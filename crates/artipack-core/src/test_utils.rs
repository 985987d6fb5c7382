//! Test utilities for building archives and source trees.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::fs;
use std::io::Cursor;
use std::io::Seek;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Creates an in-memory ZIP archive from a list of entries.
///
/// Each entry is a tuple of (name, content). Names are written verbatim, so
/// hostile names such as `../escape.txt` can be produced. Files are stored
/// uncompressed with mode 0o644.
///
/// # Examples
///
/// ```
/// use artipack_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(vec![("file.txt", b"hello"), ("dir/nested.txt", b"world")]);
/// ```
#[must_use]
pub fn create_test_zip(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    entries
        .into_iter()
        .fold(ZipTestBuilder::new(), |builder, (name, data)| {
            builder.add_file(name, data)
        })
        .build()
}

/// Builder for ZIP test archives with explicit directory entries.
///
/// [`build`](Self::build) writes through a seekable writer, which records
/// entry sizes in each local header. [`build_streamed`](Self::build_streamed)
/// writes the same entries the way non-seekable writers such as Java's
/// `ZipOutputStream` do, with sizes deferred to a trailing data descriptor.
///
/// # Examples
///
/// ```
/// use artipack_core::test_utils::ZipTestBuilder;
///
/// let zip_data = ZipTestBuilder::new()
///     .add_directory("dir/")
///     .add_file("dir/file.txt", b"content")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ZipTestBuilder {
    entries: Vec<Fixture>,
}

#[derive(Debug, Clone)]
enum Fixture {
    File {
        name: String,
        data: Vec<u8>,
        mode: u32,
        method: CompressionMethod,
    },
    Directory {
        name: String,
    },
}

impl ZipTestBuilder {
    /// Creates a new ZIP test builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stored file with mode 0o644.
    #[must_use]
    pub fn add_file(self, name: &str, data: &[u8]) -> Self {
        self.add_file_with_mode(name, data, 0o644)
    }

    /// Adds a stored file with a custom mode.
    #[must_use]
    pub fn add_file_with_mode(self, name: &str, data: &[u8], mode: u32) -> Self {
        self.push_file(name, data, mode, CompressionMethod::Stored)
    }

    /// Adds a deflated file.
    #[must_use]
    pub fn add_deflated_file(self, name: &str, data: &[u8]) -> Self {
        self.push_file(name, data, 0o644, CompressionMethod::Deflated)
    }

    /// Adds a directory entry.
    #[must_use]
    pub fn add_directory(mut self, name: &str) -> Self {
        self.entries.push(Fixture::Directory {
            name: name.to_string(),
        });
        self
    }

    /// Builds the archive with sizes in every local header.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        write_fixtures(&mut zip, &self.entries);
        zip.finish().unwrap().into_inner()
    }

    /// Builds the archive with sizes in trailing data descriptors.
    #[must_use]
    pub fn build_streamed(self) -> Vec<u8> {
        let mut out = Vec::new();
        let mut zip = ZipWriter::new_stream(&mut out);
        write_fixtures(&mut zip, &self.entries);
        zip.finish().unwrap();
        out
    }

    fn push_file(mut self, name: &str, data: &[u8], mode: u32, method: CompressionMethod) -> Self {
        self.entries.push(Fixture::File {
            name: name.to_string(),
            data: data.to_vec(),
            mode,
            method,
        });
        self
    }
}

fn write_fixtures<W: Write + Seek>(zip: &mut ZipWriter<W>, entries: &[Fixture]) {
    for entry in entries {
        match entry {
            Fixture::File {
                name,
                data,
                mode,
                method,
            } => {
                let options = SimpleFileOptions::default()
                    .compression_method(*method)
                    .unix_permissions(*mode);
                zip.start_file(name.as_str(), options).unwrap();
                zip.write_all(data).unwrap();
            }
            Fixture::Directory { name } => {
                let options = SimpleFileOptions::default().unix_permissions(0o755);
                zip.add_directory(name.as_str(), options).unwrap();
            }
        }
    }
}

/// Collects formatted log output in memory.
///
/// Clones share one buffer, so a clone can be handed to a log formatter
/// while the original is inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Creates an empty capture buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes a source tree below `root`.
///
/// Each entry is a tuple of (relative path, content); a path ending in `/`
/// creates a directory and ignores the content. Parent directories are created
/// as needed.
///
/// # Examples
///
/// ```
/// use artipack_core::test_utils::create_test_tree;
///
/// let temp = tempfile::TempDir::new().unwrap();
/// create_test_tree(temp.path(), &[("a/b.txt", b"x"), ("empty/", b"")]);
/// assert!(temp.path().join("empty").is_dir());
/// ```
pub fn create_test_tree(root: &Path, entries: &[(&str, &[u8])]) {
    for (rel, data) in entries {
        let path = root.join(rel.trim_end_matches('/'));
        if rel.ends_with('/') {
            fs::create_dir_all(&path).unwrap();
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, data).unwrap();
        }
    }
}
