//! I/O helpers shared across operations.

pub mod close;
pub mod peek;

pub use close::close_quietly;
pub use peek::StreamStart;
pub use peek::peek_archive_start;
