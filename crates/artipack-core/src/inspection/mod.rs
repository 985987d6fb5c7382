//! Archive inspection without extraction.
//!
//! # Examples
//!
//! ```no_run
//! use artipack_core::Lister;
//!
//! let names = Lister::new().list_entries("results.zip")?;
//! println!("Archive contains {} entries", names.len());
//! # Ok::<(), artipack_core::ArchiveError>(())
//! ```

pub mod list;

pub use list::Lister;
pub use list::list_entries;
pub use list::list_entries_from_stream;
