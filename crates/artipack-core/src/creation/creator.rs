//! Reusable archiver.

use std::path::Path;

use crate::Result;
use crate::creation::config::CreationConfig;
use crate::creation::report::CreationReport;
use crate::creation::zip;

/// Archives directory trees and single files with a fixed configuration.
///
/// An `Archiver` carries no per-call state: the source root of each call
/// lives only for that call, so one value can be shared across threads and
/// used for concurrent operations.
///
/// # Examples
///
/// ```no_run
/// use artipack_core::Archiver;
///
/// let archiver = Archiver::new().compression_level(9);
/// let report = archiver.archive_directory("results.zip", "target/test-results")?;
/// println!("Archived {} files", report.files_added);
/// # Ok::<(), artipack_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Archiver {
    config: CreationConfig,
}

impl Archiver {
    /// Creates an `Archiver` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an `Archiver` with the given configuration.
    #[must_use]
    pub fn with_config(config: CreationConfig) -> Self {
        Self { config }
    }

    /// Sets the compression level (0 stores entries uncompressed).
    #[must_use]
    pub fn compression_level(mut self, level: u8) -> Self {
        self.config = self.config.with_compression_level(level);
        self
    }

    /// Sets whether symlinks are followed.
    #[must_use]
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.config.follow_symlinks = follow;
        self
    }

    /// Sets whether Unix permission bits are stored with file entries.
    #[must_use]
    pub fn preserve_permissions(mut self, preserve: bool) -> Self {
        self.config.preserve_permissions = preserve;
        self
    }

    /// Sets the transfer buffer size.
    #[must_use]
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.config.buffer_size = size;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &CreationConfig {
        &self.config
    }

    /// Archives everything below `source_dir` into `destination`.
    ///
    /// See [`zip::archive_directory`].
    pub fn archive_directory<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        destination: P,
        source_dir: Q,
    ) -> Result<CreationReport> {
        zip::archive_directory(destination.as_ref(), source_dir.as_ref(), &self.config)
    }

    /// Archives the single file `from` into `to`.
    ///
    /// See [`zip::archive_file`].
    pub fn archive_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        from: P,
        to: Q,
    ) -> Result<CreationReport> {
        zip::archive_file(from.as_ref(), to.as_ref(), &self.config)
    }
}
