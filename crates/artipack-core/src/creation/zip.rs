//! ZIP archive creation.
//!
//! Directory trees are written depth-first: a directory's `/`-suffixed entry
//! is appended before any entry beneath it, and file contents are streamed
//! through one reusable transfer buffer.

use std::fs;
use std::fs::File;
use std::fs::Metadata;
use std::io::BufWriter;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use tracing::debug;
use tracing::info;
use tracing::warn;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::ArchiveError;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;
use crate::creation::config::CreationConfig;
use crate::creation::report::CreationReport;
use crate::creation::walker::EntryKind;
use crate::creation::walker::TreeWalker;
use crate::io::close_quietly;
use crate::types::EntryName;
use crate::types::SourceRoot;

/// Archives every file and directory below `source_dir` into a new ZIP file
/// at `destination`.
///
/// `source_dir` itself is not stored; entry names are relative to it.
/// An existing file at `destination` is truncated.
///
/// # Examples
///
/// ```no_run
/// use artipack_core::creation::CreationConfig;
/// use artipack_core::creation::zip::archive_directory;
/// use std::path::Path;
///
/// let config = CreationConfig::default();
/// let report = archive_directory(Path::new("out.zip"), Path::new("artifacts"), &config)?;
/// println!("Added {} files", report.files_added);
/// # Ok::<(), artipack_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// - [`ArchiveError::InvalidInput`] if `source_dir` is not a directory; the
///   destination is not touched in that case.
/// - [`ArchiveError::ArchiveWrite`] on any I/O failure while walking, reading
///   source files or writing the archive.
pub fn archive_directory(
    destination: &Path,
    source_dir: &Path,
    config: &CreationConfig,
) -> Result<CreationReport> {
    let root = SourceRoot::directory(source_dir)?;
    let start = Instant::now();

    let file = File::create(destination).map_err(|e| ArchiveError::archive_write(destination, e))?;
    // The output may live below the source root; the walk must not pick it up.
    let own_path = fs::canonicalize(destination).ok();
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let mut report = CreationReport::new();

    write_tree(&mut zip, &root, destination, own_path.as_deref(), config, &mut report)?;
    finish(zip, destination)?;

    report.duration = start.elapsed();
    info!(
        archive = %destination.display(),
        files = report.files_added,
        directories = report.directories_added,
        bytes = report.bytes_written,
        "archive created"
    );
    Ok(report)
}

/// Archives a single file into a new ZIP file at `to`.
///
/// The archive holds exactly one entry, named after the source file's final
/// path component.
///
/// # Errors
///
/// - [`ArchiveError::InvalidInput`] if `from` is not a regular file or its name
///   is not valid UTF-8.
/// - [`ArchiveError::ArchiveWrite`] on any I/O failure.
pub fn archive_file(from: &Path, to: &Path, config: &CreationConfig) -> Result<CreationReport> {
    if !from.is_file() {
        return Err(ArchiveError::invalid_input(from, "not a regular file"));
    }
    let file_name = from
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ArchiveError::invalid_input(from, "file name is not valid UTF-8"))?;
    let name = EntryName::new(file_name);
    let start = Instant::now();

    let file = File::create(to).map_err(|e| ArchiveError::archive_write(to, e))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let mut report = CreationReport::new();
    let mut buffer = CopyBuffer::with_size(config.buffer_size);
    let options = file_options(config);

    add_file(&mut zip, from, &name, to, config, options, &mut buffer, &mut report)?;
    finish(zip, to)?;

    report.duration = start.elapsed();
    info!(archive = %to.display(), entry = %name, "single file archived");
    Ok(report)
}

/// Writes every entry below `root` into `zip`.
fn write_tree<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    root: &SourceRoot,
    destination: &Path,
    own_path: Option<&Path>,
    config: &CreationConfig,
    report: &mut CreationReport,
) -> Result<()> {
    let options = file_options(config);
    let mut buffer = CopyBuffer::with_size(config.buffer_size);

    for entry in TreeWalker::new(root, config).walk() {
        let entry = entry.map_err(|e| ArchiveError::archive_write(destination, std::io::Error::from(e)))?;

        match entry.kind {
            EntryKind::Directory => {
                let name = root.entry_name(&entry.path, true)?;
                zip.add_directory(name.as_str(), options)
                    .map_err(|e| ArchiveError::archive_write(destination, e))?;
                report.directories_added += 1;
                debug!(entry = %name, "added directory");
            }
            EntryKind::File if is_output_file(&entry.path, own_path) => {
                warn!(path = %entry.path.display(), "skipping the archive being written");
                report.files_skipped += 1;
                report.add_warning(format!(
                    "Skipped the archive being written: {}",
                    entry.path.display()
                ));
            }
            EntryKind::File => {
                let name = root.entry_name(&entry.path, false)?;
                add_file(
                    zip,
                    &entry.path,
                    &name,
                    destination,
                    config,
                    options,
                    &mut buffer,
                    report,
                )?;
            }
            EntryKind::Symlink | EntryKind::Other => {
                warn!(path = %entry.path.display(), kind = ?entry.kind, "skipping entry");
                report.files_skipped += 1;
                report.add_warning(format!("Skipped {:?}: {}", entry.kind, entry.path.display()));
            }
        }
    }

    Ok(())
}

/// Returns `true` if `path` is the archive currently being written.
fn is_output_file(path: &Path, own_path: Option<&Path>) -> bool {
    own_path.is_some_and(|own| {
        path.file_name() == own.file_name()
            && fs::canonicalize(path).is_ok_and(|canonical| canonical == own)
    })
}

/// Appends one file entry and streams the file's contents into it.
#[allow(clippy::too_many_arguments)]
fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    file_path: &Path,
    name: &EntryName,
    destination: &Path,
    config: &CreationConfig,
    options: SimpleFileOptions,
    buffer: &mut CopyBuffer,
    report: &mut CreationReport,
) -> Result<()> {
    let mut file = File::open(file_path).map_err(|e| ArchiveError::archive_write(destination, e))?;

    let options = if config.preserve_permissions {
        let metadata = file
            .metadata()
            .map_err(|e| ArchiveError::archive_write(destination, e))?;
        with_permissions(options, &metadata)
    } else {
        options
    };

    zip.start_file(name.as_str(), options)
        .map_err(|e| ArchiveError::archive_write(destination, e))?;

    let bytes = copy_with_buffer(&mut file, zip, buffer)
        .map_err(|e| ArchiveError::archive_write(destination, e.into_inner()))?;

    report.files_added += 1;
    report.bytes_written += bytes;
    debug!(entry = %name, bytes, "added file");
    Ok(())
}

/// Writes the central directory and releases the output file.
fn finish(zip: ZipWriter<BufWriter<File>>, destination: &Path) -> Result<()> {
    let writer = zip
        .finish()
        .map_err(|e| ArchiveError::archive_write(destination, e))?;
    let file = writer
        .into_inner()
        .map_err(|e| ArchiveError::archive_write(destination, e.into_error()))?;
    close_quietly(file, destination);
    Ok(())
}

fn file_options(config: &CreationConfig) -> SimpleFileOptions {
    match config.compression_level {
        Some(0) => SimpleFileOptions::default().compression_method(CompressionMethod::Stored),
        level => SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(level.map(i64::from)),
    }
}

#[cfg(unix)]
fn with_permissions(options: SimpleFileOptions, metadata: &Metadata) -> SimpleFileOptions {
    use std::os::unix::fs::PermissionsExt;
    options.unix_permissions(metadata.permissions().mode())
}

#[cfg(not(unix))]
fn with_permissions(options: SimpleFileOptions, _metadata: &Metadata) -> SimpleFileOptions {
    options
}
