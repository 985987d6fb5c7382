//! Error types for archive operations.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;
use zip::result::ZipError;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while archiving, listing or extracting.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The source path does not have the required shape.
    #[error("invalid input {path}: {reason}")]
    InvalidInput {
        /// The offending path.
        path: PathBuf,
        /// Why the path was refused.
        reason: String,
    },

    /// Writing the output container failed.
    #[error("failed to write archive {path}: {source}")]
    ArchiveWrite {
        /// Path of the archive being written.
        path: PathBuf,
        /// Underlying codec or I/O failure.
        #[source]
        source: ZipError,
    },

    /// Reading the input container failed.
    #[error("failed to read archive: {source}")]
    ArchiveRead {
        /// Underlying codec or I/O failure.
        #[source]
        source: ZipError,
    },

    /// A directory required for extraction could not be created.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreation {
        /// The directory that could not be created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// An extracted file could not be opened or written.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        /// Destination file path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// An entry name would resolve outside the extraction directory.
    #[error("path traversal detected in entry: {entry}")]
    PathTraversal {
        /// The raw entry name as stored in the archive.
        entry: String,
    },
}

impl ArchiveError {
    pub(crate) fn invalid_input(path: &Path, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub(crate) fn archive_write(path: &Path, source: impl Into<ZipError>) -> Self {
        Self::ArchiveWrite {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    pub(crate) fn archive_read(source: impl Into<ZipError>) -> Self {
        Self::ArchiveRead {
            source: source.into(),
        }
    }

    pub(crate) fn directory_creation(path: &Path, source: std::io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn file_write(path: &Path, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns `true` if this error was raised by entry path validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use artipack_core::ArchiveError;
    ///
    /// let err = ArchiveError::PathTraversal {
    ///     entry: "../etc/passwd".to_string(),
    /// };
    /// assert!(err.is_security_violation());
    /// ```
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(self, Self::PathTraversal { .. })
    }

    /// Returns the filesystem path this error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::InvalidInput { path, .. }
            | Self::ArchiveWrite { path, .. }
            | Self::DirectoryCreation { path, .. }
            | Self::FileWrite { path, .. } => Some(path),
            Self::ArchiveRead { .. } | Self::PathTraversal { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_invalid_input_display() {
        let err = ArchiveError::invalid_input(Path::new("/tmp/file.txt"), "not a directory");
        assert_eq!(
            err.to_string(),
            "invalid input /tmp/file.txt: not a directory"
        );
        assert_eq!(err.path(), Some(Path::new("/tmp/file.txt")));
    }

    #[test]
    fn test_path_traversal_error() {
        let err = ArchiveError::PathTraversal {
            entry: "../etc/passwd".to_string(),
        };
        assert!(err.to_string().contains("path traversal"));
        assert!(err.to_string().contains("../etc/passwd"));
        assert!(err.is_security_violation());
        assert!(err.path().is_none());
    }

    #[test]
    fn test_directory_creation_keeps_source() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = ArchiveError::directory_creation(Path::new("out/sub"), io_err);
        assert!(!err.is_security_violation());
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("denied"));
    }

    #[test]
    fn test_archive_read_from_io() {
        let err = ArchiveError::archive_read(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(matches!(
            err,
            ArchiveError::ArchiveRead {
                source: ZipError::Io(_)
            }
        ));
        assert!(err.to_string().starts_with("failed to read archive"));
    }

    #[test]
    fn test_archive_write_carries_path() {
        let err = ArchiveError::archive_write(
            Path::new("out.zip"),
            io::Error::other("disk full"),
        );
        assert_eq!(err.path(), Some(Path::new("out.zip")));
        assert!(err.to_string().starts_with("failed to write archive out.zip"));
        assert!(err.source().is_some());
    }
}
