//! Extraction operation reporting.

use std::time::Duration;

/// Report of an extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Number of file entries written to disk.
    pub files_extracted: usize,

    /// Number of directory entries materialized.
    pub directories_created: usize,

    /// Total payload bytes written to disk.
    pub bytes_written: u64,

    /// Number of entries that were not materialized.
    pub entries_skipped: usize,

    /// Duration of the extraction.
    pub duration: Duration,

    /// Warnings generated during extraction.
    pub warnings: Vec<String>,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Returns the number of entries materialized.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_report_default() {
        let report = ExtractionReport::new();
        assert_eq!(report.total_items(), 0);
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_total_items_and_warnings() {
        let mut report = ExtractionReport::new();
        report.files_extracted = 3;
        report.directories_created = 2;
        report.add_warning("skipped ./");
        assert_eq!(report.total_items(), 5);
        assert!(report.has_warnings());
    }
}
