//! Configuration for archive creation.

use crate::copy::DEFAULT_BUFFER_SIZE;

/// Configuration for archive creation.
///
/// # Examples
///
/// ```
/// use artipack_core::creation::CreationConfig;
///
/// let config = CreationConfig::default()
///     .with_compression_level(9)
///     .with_follow_symlinks(true);
/// assert_eq!(config.compression_level, Some(9));
/// ```
#[derive(Debug, Clone)]
pub struct CreationConfig {
    /// Size of the transfer buffer used to copy file contents.
    ///
    /// Default: 40960 bytes.
    pub buffer_size: usize,

    /// Deflate compression level (1-9), `Some(0)` to store entries
    /// uncompressed, `None` for the codec default.
    ///
    /// Default: `Some(6)`.
    pub compression_level: Option<u8>,

    /// Follow symlinks and archive what they point to.
    ///
    /// Default: `false` (symlinks are skipped with a warning).
    pub follow_symlinks: bool,

    /// Store Unix permission bits with each file entry.
    ///
    /// Default: `true`.
    pub preserve_permissions: bool,
}

impl Default for CreationConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            compression_level: Some(6),
            follow_symlinks: false,
            preserve_permissions: true,
        }
    }
}

impl CreationConfig {
    /// Creates a new `CreationConfig` with default settings.
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

    /// Sets the compression level. Values above 9 are clamped to 9.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = Some(level.min(9));
        self
    }

    /// Sets whether to follow symlinks.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Sets whether to store permissions.
    #[must_use]
    pub fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }
}
