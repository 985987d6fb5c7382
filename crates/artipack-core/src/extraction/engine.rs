//! Reusable extractor.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::ArchiveError;
use crate::EntryPathPolicy;
use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::Result;
use crate::extraction::archive;
use crate::extraction::stream;

/// Extracts ZIP archives with a fixed configuration.
///
/// # Examples
///
/// ```no_run
/// use artipack_core::EntryPathPolicy;
/// use artipack_core::Extractor;
///
/// let extractor = Extractor::new().entry_paths(EntryPathPolicy::Sanitize);
/// let report = extractor.extract("results.zip", "restored")?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok::<(), artipack_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractionConfig,
}

impl Extractor {
    /// Creates an `Extractor` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an `Extractor` with the given configuration.
    #[must_use]
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Sets the entry name policy.
    #[must_use]
    pub fn entry_paths(mut self, policy: EntryPathPolicy) -> Self {
        self.config.entry_paths = policy;
        self
    }

    /// Sets the transfer buffer size.
    #[must_use]
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.config.buffer_size = size;
        self
    }

    /// Sets whether stored Unix permissions are applied.
    #[must_use]
    pub fn preserve_permissions(mut self, preserve: bool) -> Self {
        self.config.preserve_permissions = preserve;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extracts the ZIP file at `archive_path` into `extract_dir`.
    ///
    /// The file is read through its central directory, so archives written by
    /// non-seekable writers extract too.
    ///
    /// # Errors
    ///
    /// [`ArchiveError::ArchiveRead`] if the archive cannot be opened, plus
    /// everything [`archive::extract_from_archive`] reports.
    pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        archive_path: P,
        extract_dir: Q,
    ) -> Result<ExtractionReport> {
        let archive_path = archive_path.as_ref();
        let file = File::open(archive_path).map_err(ArchiveError::archive_read)?;
        debug!(archive = %archive_path.display(), "opened archive");
        archive::extract_from_archive(BufReader::new(file), extract_dir.as_ref(), &self.config)
    }

    /// Extracts the ZIP stream `reader` into `extract_dir`.
    ///
    /// Entries whose sizes are deferred to a data descriptor cannot be read
    /// this way; prefer [`extract`](Self::extract) for files on disk. See
    /// [`stream::extract_from_stream`].
    pub fn extract_from_stream<R: Read, Q: AsRef<Path>>(
        &self,
        reader: R,
        extract_dir: Q,
    ) -> Result<ExtractionReport> {
        stream::extract_from_stream(reader, extract_dir.as_ref(), &self.config)
    }
}
