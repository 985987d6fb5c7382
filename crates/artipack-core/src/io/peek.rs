//! Detecting archives without entries at the head of a stream.

use std::io::Chain;
use std::io::Cursor;
use std::io::Read;
use std::io::{self};

/// Signature of the end-of-central-directory record.
const EOCD_SIGNATURE: &[u8; 4] = b"PK\x05\x06";

/// What the first bytes of a ZIP stream announce.
pub enum StreamStart<R> {
    /// The stream is empty or holds only an end-of-central-directory record.
    Empty,

    /// Entries may follow; the peeked bytes are replayed ahead of the rest.
    Entries(Chain<Cursor<Vec<u8>>, R>),
}

/// Peeks at the first four bytes of `reader`.
///
/// The sequential entry reader only understands local file headers, so an
/// archive without any entries has to be recognised before it is handed over.
///
/// # Errors
///
/// Propagates read failures from `reader`.
pub fn peek_archive_start<R: Read>(mut reader: R) -> io::Result<StreamStart<R>> {
    let mut prefix = Vec::with_capacity(EOCD_SIGNATURE.len());
    (&mut reader)
        .take(EOCD_SIGNATURE.len() as u64)
        .read_to_end(&mut prefix)?;

    if prefix.is_empty() || prefix.as_slice() == EOCD_SIGNATURE {
        return Ok(StreamStart::Empty);
    }
    Ok(StreamStart::Entries(Cursor::new(prefix).chain(reader)))
}
