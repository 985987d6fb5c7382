//! Extraction configuration.

use crate::copy::DEFAULT_BUFFER_SIZE;

/// How entry names are mapped onto the extraction directory.
///
/// Entry names come from the archive and are untrusted: a name such as
/// `../../etc/cron.d/job` or `/etc/passwd` would land outside the destination
/// if it were concatenated onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryPathPolicy {
    /// Fail the extraction on any `..`, root or drive-prefix component.
    #[default]
    Reject,

    /// Drop `..`, root and drive-prefix components and extract what remains.
    ///
    /// An entry with nothing left after sanitizing is skipped.
    Sanitize,

    /// Concatenate the name onto the destination unchanged.
    ///
    /// Leading `/` characters are stripped, but `..` components are kept and
    /// can escape the destination. Only for archives from trusted sources.
    Unchecked,
}

/// Configuration for extraction.
///
/// # Examples
///
/// ```
/// use artipack_core::EntryPathPolicy;
/// use artipack_core::ExtractionConfig;
///
/// let config = ExtractionConfig::default()
///     .with_entry_paths(EntryPathPolicy::Sanitize)
///     .with_buffer_size(64 * 1024);
/// assert_eq!(config.buffer_size, 64 * 1024);
/// ```
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Size of the transfer buffer used to copy entry payloads.
    pub buffer_size: usize,

    /// Entry name validation policy.
    pub entry_paths: EntryPathPolicy,

    /// Apply the Unix permission bits stored in the archive to extracted
    /// files. Ignored on other platforms.
    pub preserve_permissions: bool,
}

impl Default for ExtractionConfig {
    /// Default values:
    /// - `buffer_size`: 40960
    /// - `entry_paths`: `Reject`
    /// - `preserve_permissions`: `false`
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            entry_paths: EntryPathPolicy::Reject,
            preserve_permissions: false,
        }
    }
}

impl ExtractionConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transfer buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Sets the entry name validation policy.
    #[must_use]
    pub fn with_entry_paths(mut self, policy: EntryPathPolicy) -> Self {
        self.entry_paths = policy;
        self
    }

    /// Sets whether stored permissions are applied.
    #[must_use]
    pub fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }
}
