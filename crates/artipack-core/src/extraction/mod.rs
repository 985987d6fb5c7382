//! Archive extraction.
//!
//! Extraction materializes each entry below a destination directory,
//! validating entry names against the configured
//! [`EntryPathPolicy`](crate::EntryPathPolicy). Seekable input is read
//! through its central directory; other input is read sequentially from
//! local headers.

pub mod archive;
pub mod engine;
mod sink;
pub mod stream;

pub use archive::extract_from_archive;
pub use engine::Extractor;
pub use stream::extract_from_stream;
