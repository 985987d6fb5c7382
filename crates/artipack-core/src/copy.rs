//! Buffered stream copy shared by archiving and extraction.
//!
//! Both directions move payload bytes through one reusable, fixed-size
//! transfer buffer, so peak memory is bounded by the buffer size no matter how
//! large an individual file or entry is.

use std::io::Read;
use std::io::Write;
use std::io::{self};

/// Default transfer buffer size in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 40960;

/// Reusable transfer buffer for file and entry payload copies.
///
/// One buffer is allocated per operation and reused for every entry.
///
/// # Examples
///
/// ```
/// use artipack_core::copy::{copy_with_buffer, CopyBuffer};
/// use std::io::Cursor;
///
/// let mut buffer = CopyBuffer::new();
/// let mut input = Cursor::new(b"payload".to_vec());
/// let mut output = Vec::new();
///
/// let copied = copy_with_buffer(&mut input, &mut output, &mut buffer).unwrap();
/// assert_eq!(copied, 7);
/// assert_eq!(output, b"payload");
/// ```
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Vec<u8>,
}

impl CopyBuffer {
    /// Creates a buffer of [`DEFAULT_BUFFER_SIZE`] bytes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BUFFER_SIZE)
    }

    /// Creates a buffer of `size` bytes. A size of zero is clamped to one.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        Self {
            buf: vec![0u8; size.max(1)],
        }
    }

    /// Returns the buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.buf.len()
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Which side of a copy failed.
#[derive(Debug)]
pub enum CopyError {
    /// Reading from the source failed.
    Read(io::Error),
    /// Writing to the destination failed.
    Write(io::Error),
}

impl CopyError {
    /// Returns the underlying I/O error regardless of side.
    #[must_use]
    pub fn into_inner(self) -> io::Error {
        match self {
            Self::Read(e) | Self::Write(e) => e,
        }
    }
}

/// Copies `reader` into `writer` through `buffer` until end of input.
///
/// Interrupted reads are retried. Returns the number of bytes copied.
///
/// # Errors
///
/// Returns [`CopyError::Read`] or [`CopyError::Write`] depending on which
/// stream failed, so callers can attribute the failure to the right resource.
#[inline]
pub fn copy_with_buffer<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> Result<u64, CopyError> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CopyError::Read(e)),
        };

        writer
            .write_all(&buffer.buf[..bytes_read])
            .map_err(CopyError::Write)?;

        total = total.saturating_add(bytes_read as u64);
    }

    Ok(total)
}
