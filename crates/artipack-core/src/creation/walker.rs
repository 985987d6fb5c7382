//! Depth-first directory walk for archiving.
//!
//! Every directory is yielded before its contents, so the archiver writes a
//! directory's `/`-suffixed entry before any entry beneath it. Siblings come in
//! whatever order the filesystem lists them; nothing is sorted. The walk keeps
//! its own stack of open directories instead of recursing, so very deep trees
//! cannot exhaust the call stack.

use std::path::PathBuf;

use walkdir::WalkDir;

use crate::creation::config::CreationConfig;
use crate::types::SourceRoot;

/// Kind of a filesystem entry found during the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file (or a followed symlink to one).
    File,

    /// Directory (or a followed symlink to one).
    Directory,

    /// Symlink that is not followed.
    Symlink,

    /// Socket, FIFO, device or anything else without a byte payload.
    Other,
}

/// A filesystem entry below the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Full filesystem path.
    pub path: PathBuf,

    /// Entry kind, with symlinks resolved when following them.
    pub kind: EntryKind,

    /// Depth below the source root; direct children have depth 1.
    pub depth: usize,
}

/// Walks everything below a [`SourceRoot`], excluding the root itself.
///
/// # Examples
///
/// ```no_run
/// use artipack_core::creation::CreationConfig;
/// use artipack_core::creation::walker::TreeWalker;
/// use artipack_core::types::SourceRoot;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CreationConfig::default();
/// let root = SourceRoot::directory(Path::new("artifacts"))?;
///
/// for entry in TreeWalker::new(&root, &config).walk() {
///     let entry = entry?;
///     println!("{:?} {}", entry.kind, entry.path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub struct TreeWalker<'a> {
    root: &'a SourceRoot,
    config: &'a CreationConfig,
}

impl<'a> TreeWalker<'a> {
    /// Creates a walker over `root`.
    #[must_use]
    pub fn new(root: &'a SourceRoot, config: &'a CreationConfig) -> Self {
        Self { root, config }
    }

    /// Returns the depth-first iterator over all entries below the root.
    ///
    /// # Errors
    ///
    /// Items are `Err` when a directory cannot be listed, metadata cannot be
    /// read, or a followed symlink forms a loop.
    pub fn walk(&self) -> impl Iterator<Item = walkdir::Result<WalkEntry>> + '_ {
        WalkDir::new(self.root.as_path())
            .min_depth(1)
            .follow_links(self.config.follow_symlinks)
            .into_iter()
            .map(|entry| {
                let entry = entry?;
                let file_type = entry.file_type();
                let kind = if file_type.is_dir() {
                    EntryKind::Directory
                } else if file_type.is_file() {
                    EntryKind::File
                } else if file_type.is_symlink() {
                    EntryKind::Symlink
                } else {
                    EntryKind::Other
                };
                Ok(WalkEntry {
                    depth: entry.depth(),
                    path: entry.into_path(),
                    kind,
                })
            })
    }
}
