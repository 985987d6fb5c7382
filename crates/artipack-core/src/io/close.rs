//! Releasing output streams without escalating failures.

use std::io::Write;
use std::path::Path;

use tracing::warn;

/// Flushes and drops `writer`, logging a warning if the flush fails.
///
/// Called once an operation has already succeeded or failed on its own
/// terms: a failure here never replaces that outcome.
pub fn close_quietly<W: Write>(mut writer: W, path: &Path) {
    if let Err(e) = writer.flush() {
        warn!(path = %path.display(), error = %e, "unable to close output stream");
    }
}
