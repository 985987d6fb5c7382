//! Extraction destination directory.

use crate::ArchiveError;
use crate::Result;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

/// Root directory under which extraction materializes entries.
///
/// Constructing a `DestDir` guarantees the directory exists: it is created,
/// together with any missing ancestors, before the first entry is written.
///
/// # Examples
///
/// ```no_run
/// use artipack_core::types::DestDir;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::create(Path::new("restored/run-42"))?;
/// assert!(dest.as_path().is_dir());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestDir(PathBuf);

impl DestDir {
    /// Ensures `path` exists as a directory, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::DirectoryCreation`] if the directory cannot be
    /// created or the path exists but is not a directory.
    pub fn create(path: &Path) -> Result<Self> {
        if path.exists() && !path.is_dir() {
            return Err(ArchiveError::directory_creation(
                path,
                io::Error::new(io::ErrorKind::AlreadyExists, "path exists and is not a directory"),
            ));
        }

        fs::create_dir_all(path).map_err(|e| ArchiveError::directory_creation(path, e))?;

        let absolute =
            std::path::absolute(path).map_err(|e| ArchiveError::directory_creation(path, e))?;
        Ok(Self(absolute))
    }

    /// Returns the destination path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Joins a relative entry path onto the destination.
    #[must_use]
    pub fn join(&self, relative: &Path) -> PathBuf {
        self.0.join(relative)
    }

    /// Creates `relative` and all missing ancestors under the destination.
    ///
    /// Existing directories are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::DirectoryCreation`] on failure.
    pub fn ensure_dir(&self, relative: &Path) -> Result<PathBuf> {
        let full = self.join(relative);
        if !full.is_dir() {
            fs::create_dir_all(&full).map_err(|e| ArchiveError::directory_creation(&full, e))?;
        }
        Ok(full)
    }
}
