//! Streaming extraction.
//!
//! Entries are read from local headers in the order they appear in the
//! container, without seeking and without buffering a whole entry: each
//! payload moves to disk through the transfer buffer and only one output file
//! is open at a time.
//!
//! Reading local headers only works when each header carries the entry's
//! sizes. Writers that cannot seek back, such as Java's `ZipOutputStream` or
//! `jar`, defer the sizes to a data descriptor after the payload; such
//! entries fail with [`ArchiveError::ArchiveRead`]. Use
//! [`extract_from_archive`](crate::extraction::archive::extract_from_archive)
//! when the input is seekable.

use std::io::Read;
use std::path::Path;

use tracing::debug;
use zip::read::read_zipfile_from_stream;

use crate::ArchiveError;
use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::Result;
use crate::extraction::sink::EntrySink;
use crate::io::StreamStart;
use crate::io::peek_archive_start;
use crate::types::EntryName;

/// Extracts every entry of the ZIP stream `reader` below `extract_dir`.
///
/// `extract_dir` and any missing ancestors are created first. Directory
/// entries are created if absent; file entries get their parent chain created
/// on demand and overwrite whatever file already exists at their path.
///
/// # Errors
///
/// - [`ArchiveError::DirectoryCreation`] if `extract_dir` or a directory an
///   entry needs cannot be created.
/// - [`ArchiveError::ArchiveRead`] if a header or payload cannot be read,
///   including entries whose sizes are only recorded in a trailing data
///   descriptor.
/// - [`ArchiveError::PathTraversal`] if an entry name is rejected by
///   [`EntryPathPolicy::Reject`](crate::EntryPathPolicy::Reject).
/// - [`ArchiveError::FileWrite`] if an output file cannot be written.
///
/// Files written before a failure are left in place.
pub fn extract_from_stream<R: Read>(
    reader: R,
    extract_dir: &Path,
    config: &ExtractionConfig,
) -> Result<ExtractionReport> {
    let mut sink = EntrySink::new(extract_dir, config)?;

    let mut reader = match peek_archive_start(reader).map_err(ArchiveError::archive_read)? {
        StreamStart::Entries(reader) => reader,
        StreamStart::Empty => {
            debug!("archive has no entries");
            return Ok(sink.finish());
        }
    };

    while let Some(mut entry) =
        read_zipfile_from_stream(&mut reader).map_err(ArchiveError::archive_read)?
    {
        let name = EntryName::new(entry.name());
        let unix_mode = entry.unix_mode();
        sink.write_entry(&name, unix_mode, &mut entry)?;
    }

    Ok(sink.finish())
}
