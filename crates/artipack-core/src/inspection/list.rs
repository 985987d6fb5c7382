//! Archive listing implementation.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;
use zip::read::read_zipfile_from_stream;

use crate::ArchiveError;
use crate::Result;
use crate::io::StreamStart;
use crate::io::peek_archive_start;

/// Lists the entry names of the ZIP file at `archive_path`.
///
/// Names are returned raw, exactly as stored, in central directory order.
/// Directory entries keep their trailing `/`. No entry is validated or
/// extracted, and no file is written.
///
/// # Errors
///
/// Returns [`ArchiveError::ArchiveRead`] if the file cannot be opened, is not
/// a ZIP archive, or an entry header is malformed.
///
/// # Examples
///
/// ```no_run
/// use artipack_core::list_entries;
///
/// for name in list_entries("results.zip")? {
///     println!("{name}");
/// }
/// # Ok::<(), artipack_core::ArchiveError>(())
/// ```
pub fn list_entries<P: AsRef<Path>>(archive_path: P) -> Result<Vec<String>> {
    let archive_path = archive_path.as_ref();
    let file = File::open(archive_path).map_err(ArchiveError::archive_read)?;
    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(ArchiveError::archive_read)?;

    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive.by_index_raw(i).map_err(ArchiveError::archive_read)?;
        names.push(entry.name().to_string());
    }

    debug!(archive = %archive_path.display(), entries = names.len(), "listed archive");
    Ok(names)
}

/// Lists the entry names of the ZIP stream `reader`.
///
/// Names come from local headers in the order they appear in the stream.
/// Payloads are read and discarded, so the whole stream is consumed.
///
/// Local headers written by non-seekable writers, such as Java's
/// `ZipOutputStream`, leave the entry sizes to a trailing data descriptor and
/// cannot be skipped over; listing such a stream fails. [`list_entries`]
/// reads the central directory and has no such restriction.
///
/// # Errors
///
/// Returns [`ArchiveError::ArchiveRead`] if the stream cannot be read, an
/// entry header is malformed, or an entry's sizes are only recorded in a data
/// descriptor.
pub fn list_entries_from_stream<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut reader = match peek_archive_start(reader).map_err(ArchiveError::archive_read)? {
        StreamStart::Entries(reader) => reader,
        StreamStart::Empty => return Ok(Vec::new()),
    };

    let mut names = Vec::new();
    while let Some(entry) = read_zipfile_from_stream(&mut reader).map_err(ArchiveError::archive_read)? {
        names.push(entry.name().to_string());
    }

    debug!(entries = names.len(), "listed archive stream");
    Ok(names)
}

/// Lists archive contents.
///
/// A stateless handle for symmetry with [`Archiver`](crate::Archiver) and
/// [`Extractor`](crate::Extractor).
#[derive(Debug, Clone, Copy, Default)]
pub struct Lister;

impl Lister {
    /// Creates a `Lister`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// See [`list_entries`].
    pub fn list_entries<P: AsRef<Path>>(&self, archive_path: P) -> Result<Vec<String>> {
        list_entries(archive_path)
    }

    /// See [`list_entries_from_stream`].
    pub fn list_entries_from_stream<R: Read>(&self, reader: R) -> Result<Vec<String>> {
        list_entries_from_stream(reader)
    }
}
