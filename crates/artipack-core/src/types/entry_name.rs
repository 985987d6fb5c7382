//! Archive entry names.

use std::fmt;

/// Name of an entry inside an archive.
///
/// Entry names are relative, use `/` as the only separator, and end with `/`
/// exactly when the entry is a directory. Names built by the archiver always
/// satisfy this; names read back from an archive are kept verbatim and are
/// only trusted after passing through
/// [`resolve_entry_path`](crate::security::resolve_entry_path).
///
/// # Examples
///
/// ```
/// use artipack_core::types::EntryName;
///
/// let dir = EntryName::new("sub/");
/// assert!(dir.is_dir());
///
/// let file = EntryName::new("sub/deeper/file.txt");
/// assert!(!file.is_dir());
/// assert_eq!(file.parent(), Some("sub/deeper"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryName(String);

impl EntryName {
    /// Wraps a raw entry name without validation.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Builds a name from relative path segments.
    ///
    /// Segments are joined with `/` and a trailing `/` is appended for
    /// directories.
    pub(crate) fn from_segments<'a>(
        segments: impl IntoIterator<Item = &'a str>,
        is_dir: bool,
    ) -> Self {
        let mut name = segments.into_iter().collect::<Vec<_>>().join("/");
        if is_dir {
            name.push('/');
        }
        Self(name)
    }

    /// Returns the name as stored in the archive.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this entry denotes a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.0.ends_with('/')
    }

    /// Returns everything before the last `/` of the name, ignoring a
    /// directory's trailing slash.
    ///
    /// Returns `None` for top-level entries.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        let trimmed = self.0.strip_suffix('/').unwrap_or(&self.0);
        trimmed.rfind('/').map(|idx| &trimmed[..idx])
    }

    /// Consumes the name, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<EntryName> for String {
    fn from(name: EntryName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_detection() {
        assert!(EntryName::new("a/").is_dir());
        assert!(EntryName::new("a/b/").is_dir());
        assert!(!EntryName::new("a/b").is_dir());
        assert!(!EntryName::new("file.txt").is_dir());
    }

    #[test]
    fn test_parent() {
        assert_eq!(EntryName::new("file.txt").parent(), None);
        assert_eq!(EntryName::new("a/file.txt").parent(), Some("a"));
        assert_eq!(EntryName::new("a/b/c.txt").parent(), Some("a/b"));
        assert_eq!(EntryName::new("a/b/").parent(), Some("a"));
        assert_eq!(EntryName::new("a/").parent(), None);
    }

    #[test]
    fn test_from_segments() {
        let file = EntryName::from_segments(["sub", "file2.txt"], false);
        assert_eq!(file.as_str(), "sub/file2.txt");

        let dir = EntryName::from_segments(["sub"], true);
        assert_eq!(dir.as_str(), "sub/");
    }

    #[test]
    fn test_display_and_conversion() {
        let name = EntryName::new("x/y.bin");
        assert_eq!(name.to_string(), "x/y.bin");
        let raw: String = name.into();
        assert_eq!(raw, "x/y.bin");
    }
}
