//! Entry name to filesystem path resolution.

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::ArchiveError;
use crate::EntryPathPolicy;
use crate::Result;
use crate::types::EntryName;

/// Maps an entry name to a path relative to the extraction directory.
///
/// A directory's trailing `/` is ignored. `.` components are dropped under
/// every policy except [`EntryPathPolicy::Unchecked`], which keeps the name
/// as written apart from leading `/` characters.
///
/// Returns `Ok(None)` when nothing usable remains, e.g. for `./` or, under
/// [`EntryPathPolicy::Sanitize`], for `../`.
///
/// # Errors
///
/// Returns [`ArchiveError::PathTraversal`] under [`EntryPathPolicy::Reject`]
/// if the name contains a `..`, root or drive-prefix component.
///
/// # Examples
///
/// ```
/// use artipack_core::EntryPathPolicy;
/// use artipack_core::security::resolve_entry_path;
/// use artipack_core::types::EntryName;
/// use std::path::PathBuf;
///
/// let name = EntryName::new("a/b/c.txt");
/// let path = resolve_entry_path(&name, EntryPathPolicy::Reject).unwrap();
/// assert_eq!(path, Some(PathBuf::from("a/b/c.txt")));
///
/// let evil = EntryName::new("../outside.txt");
/// assert!(resolve_entry_path(&evil, EntryPathPolicy::Reject).is_err());
///
/// let cleaned = resolve_entry_path(&evil, EntryPathPolicy::Sanitize).unwrap();
/// assert_eq!(cleaned, Some(PathBuf::from("outside.txt")));
/// ```
pub fn resolve_entry_path(name: &EntryName, policy: EntryPathPolicy) -> Result<Option<PathBuf>> {
    let raw = name.as_str();
    let trimmed = raw.strip_suffix('/').unwrap_or(raw);

    if policy == EntryPathPolicy::Unchecked {
        let relative = trimmed.trim_start_matches('/');
        return Ok((!relative.is_empty()).then(|| PathBuf::from(relative)));
    }

    let mut resolved = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(segment) => resolved.push(segment),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                if policy == EntryPathPolicy::Reject {
                    return Err(ArchiveError::PathTraversal {
                        entry: raw.to_string(),
                    });
                }
            }
        }
    }

    Ok((!resolved.as_os_str().is_empty()).then_some(resolved))
}
