//! Validation of untrusted entry names during extraction.

pub mod path;

pub use path::resolve_entry_path;
