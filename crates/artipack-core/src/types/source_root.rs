//! The directory an archive is built from.

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::ArchiveError;
use crate::Result;
use crate::types::EntryName;

/// Root of an archive operation; every entry name is computed relative to it.
///
/// A `SourceRoot` lives for exactly one archive call and is passed down the
/// directory walk by reference, so a single [`Archiver`](crate::Archiver) can
/// serve concurrent calls.
///
/// # Examples
///
/// ```no_run
/// use artipack_core::types::SourceRoot;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let root = SourceRoot::directory(Path::new("artifacts"))?;
/// let name = root.entry_name(&root.as_path().join("logs/run.txt"), false)?;
/// assert_eq!(name.as_str(), "logs/run.txt");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRoot(PathBuf);

impl SourceRoot {
    /// Validates that `path` is an existing directory and makes it absolute.
    ///
    /// Symlinks are followed when checking the type, so a link to a directory
    /// is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidInput`] if the path does not exist or is
    /// not a directory.
    pub fn directory(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(ArchiveError::invalid_input(path, "not a directory"));
        }
        let absolute = std::path::absolute(path)
            .map_err(|e| ArchiveError::invalid_input(path, e.to_string()))?;
        Ok(Self(absolute))
    }

    /// Returns the root path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Computes the entry name for `full_path`.
    ///
    /// The root prefix is stripped, the remaining components are joined with
    /// `/` whatever the host separator is, and directories get a trailing
    /// `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidInput`] if `full_path` is not strictly
    /// below the root or a component is not valid UTF-8.
    pub fn entry_name(&self, full_path: &Path, is_dir: bool) -> Result<EntryName> {
        let relative = full_path
            .strip_prefix(&self.0)
            .map_err(|_| ArchiveError::invalid_input(full_path, "path is outside the source root"))?;

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(segment) => {
                    let segment = segment.to_str().ok_or_else(|| {
                        ArchiveError::invalid_input(full_path, "path is not valid UTF-8")
                    })?;
                    segments.push(segment);
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(ArchiveError::invalid_input(
                        full_path,
                        "path is outside the source root",
                    ));
                }
            }
        }

        if segments.is_empty() {
            return Err(ArchiveError::invalid_input(
                full_path,
                "the source root itself has no entry name",
            ));
        }

        Ok(EntryName::from_segments(segments, is_dir))
    }
}
