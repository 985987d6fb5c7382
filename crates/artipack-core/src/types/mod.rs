//! Path types shared by the archiver, extractor and lister.

mod dest_dir;
mod entry_name;
mod source_root;

pub use dest_dir::DestDir;
pub use entry_name::EntryName;
pub use source_root::SourceRoot;
