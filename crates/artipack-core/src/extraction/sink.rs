//! Materializing entries below the extraction directory.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::ArchiveError;
use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::CopyError;
use crate::copy::copy_with_buffer;
use crate::io::close_quietly;
use crate::security::resolve_entry_path;
use crate::types::DestDir;
use crate::types::EntryName;

/// Writes entries one at a time, whatever reader they come from.
///
/// Owns the destination, the transfer buffer and the running report for one
/// extraction.
pub(crate) struct EntrySink<'a> {
    dest: DestDir,
    config: &'a ExtractionConfig,
    buffer: CopyBuffer,
    report: ExtractionReport,
    start: Instant,
}

impl<'a> EntrySink<'a> {
    /// Creates `extract_dir` and any missing ancestors.
    pub(crate) fn new(extract_dir: &Path, config: &'a ExtractionConfig) -> Result<Self> {
        let start = Instant::now();
        Ok(Self {
            dest: DestDir::create(extract_dir)?,
            config,
            buffer: CopyBuffer::with_size(config.buffer_size),
            report: ExtractionReport::new(),
            start,
        })
    }

    /// Materializes one entry.
    ///
    /// Directory entries are created if absent and their payload is not read.
    /// File entries get their parent chain created and overwrite whatever
    /// file already exists at their path.
    pub(crate) fn write_entry<R: Read + ?Sized>(
        &mut self,
        name: &EntryName,
        unix_mode: Option<u32>,
        payload: &mut R,
    ) -> Result<()> {
        let Some(relative) = resolve_entry_path(name, self.config.entry_paths)? else {
            warn!(entry = %name, "skipping entry without a usable path");
            self.report.entries_skipped += 1;
            self.report
                .add_warning(format!("Skipped entry without a usable path: {name}"));
            return Ok(());
        };

        if name.is_dir() {
            self.dest.ensure_dir(&relative)?;
            self.report.directories_created += 1;
            debug!(entry = %name, "created directory");
            return Ok(());
        }

        if let Some(parent) = relative.parent()
            && !parent.as_os_str().is_empty()
        {
            self.dest.ensure_dir(parent)?;
        }

        let target = self.dest.join(&relative);
        if target.is_dir() {
            warn!(entry = %name, "a directory already occupies this file entry's path");
            self.report.entries_skipped += 1;
            self.report
                .add_warning(format!("Skipped file shadowed by a directory: {name}"));
            return Ok(());
        }

        let bytes = write_file(payload, &target, &mut self.buffer)?;
        if self.config.preserve_permissions {
            apply_permissions(&target, unix_mode)?;
        }

        self.report.files_extracted += 1;
        self.report.bytes_written += bytes;
        debug!(entry = %name, bytes, "extracted file");
        Ok(())
    }

    /// Stamps the duration and returns the report.
    pub(crate) fn finish(mut self) -> ExtractionReport {
        self.report.duration = self.start.elapsed();
        info!(
            destination = %self.dest.as_path().display(),
            files = self.report.files_extracted,
            directories = self.report.directories_created,
            skipped = self.report.entries_skipped,
            "extraction complete"
        );
        self.report
    }
}

/// Creates or truncates `target` and streams `payload` into it.
fn write_file<R: Read + ?Sized>(
    payload: &mut R,
    target: &Path,
    buffer: &mut CopyBuffer,
) -> Result<u64> {
    let mut out = File::create(target).map_err(|e| ArchiveError::file_write(target, e))?;

    let bytes = copy_with_buffer(payload, &mut out, buffer).map_err(|e| match e {
        CopyError::Read(e) => ArchiveError::archive_read(e),
        CopyError::Write(e) => ArchiveError::file_write(target, e),
    })?;

    close_quietly(out, target);
    Ok(bytes)
}

#[cfg(unix)]
fn apply_permissions(target: &Path, unix_mode: Option<u32>) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if let Some(mode) = unix_mode {
        std::fs::set_permissions(target, std::fs::Permissions::from_mode(mode & 0o777))
            .map_err(|e| ArchiveError::file_write(target, e))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn apply_permissions(_target: &Path, _unix_mode: Option<u32>) -> Result<()> {
    Ok(())
}
