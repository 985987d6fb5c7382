//! Archive creation.
//!
//! This module packs a directory tree, or a single file, into a ZIP archive
//! whose entry names are portable relative paths.

pub mod config;
pub mod creator;
pub mod report;
pub mod walker;
pub mod zip;

// Re-exports for public API
pub use config::CreationConfig;
pub use creator::Archiver;
pub use report::CreationReport;
pub use walker::EntryKind;
pub use walker::TreeWalker;
pub use walker::WalkEntry;
