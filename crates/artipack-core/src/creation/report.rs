//! Archive creation reporting.

use std::time::Duration;

/// Report of an archive creation.
///
/// # Examples
///
/// ```
/// use artipack_core::creation::CreationReport;
///
/// let mut report = CreationReport::new();
/// report.files_added = 2;
/// report.directories_added = 1;
/// assert_eq!(report.total_entries(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CreationReport {
    /// Number of file entries written.
    pub files_added: usize,

    /// Number of directory entries written.
    pub directories_added: usize,

    /// Total uncompressed payload bytes written.
    pub bytes_written: u64,

    /// Number of filesystem entries not archived (unfollowed symlinks,
    /// special files).
    pub files_skipped: usize,

    /// Duration of the creation.
    pub duration: Duration,

    /// Warnings generated during creation.
    pub warnings: Vec<String>,
}

impl CreationReport {
    /// Creates a new empty creation report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the number of entries written to the archive.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.files_added + self.directories_added
    }
}
