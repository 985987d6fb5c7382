//! ZIP archiving, listing and extraction for directory trees.
//!
//! `artipack-core` packs a directory tree into a ZIP archive with portable,
//! `/`-separated relative entry names, lists the entries of an archive without
//! extracting it, and unpacks an archive below a destination directory while
//! guarding against entry names that would escape it.
//!
//! All operations are synchronous and stream their payloads through a
//! fixed-size transfer buffer, so memory use does not grow with entry size.
//!
//! # Examples
//!
//! ```no_run
//! use artipack_core::archive_directory;
//! use artipack_core::extract;
//! use artipack_core::list_entries;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! archive_directory("results.zip", "target/test-results")?;
//! for name in list_entries("results.zip")? {
//!     println!("{name}");
//! }
//! let report = extract("results.zip", "/tmp/restored")?;
//! println!("Extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod copy;
pub mod creation;
pub mod error;
pub mod extraction;
pub mod inspection;
pub mod io;
pub mod report;
pub mod security;
pub mod types;

#[doc(hidden)]
pub mod test_utils;

// Re-export main API types
pub use api::archive_directory;
pub use api::archive_file;
pub use api::extract;
pub use api::extract_from_stream;
pub use config::EntryPathPolicy;
pub use config::ExtractionConfig;
pub use creation::Archiver;
pub use creation::CreationConfig;
pub use creation::CreationReport;
pub use error::ArchiveError;
pub use error::Result;
pub use extraction::Extractor;
pub use extraction::extract_from_archive;
pub use inspection::Lister;
pub use inspection::list_entries;
pub use inspection::list_entries_from_stream;
pub use report::ExtractionReport;

// Re-export types module for easier access
pub use types::DestDir;
pub use types::EntryName;
pub use types::SourceRoot;
