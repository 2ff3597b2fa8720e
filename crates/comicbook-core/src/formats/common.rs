//! Extraction and archiving steps shared by every adapter.
//!
//! The adapters differ only in how they talk to their codec. Output path
//! resolution, entry selection, file writing and source cleanup all live
//! here so that the three formats cannot drift apart.

use std::fs::File;
use std::fs::create_dir_all;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::info;

use crate::AdapterOptions;
use crate::Result;
use crate::filter::is_page;
use crate::paths::derive_archive_output_path;
use crate::paths::derive_extract_output_path;
use crate::paths::entry_relative_path;
use crate::paths::resolve_destination;

use super::detect::ContainerFormat;

/// Resolves the extraction directory and makes sure it exists.
///
/// Extracting into an existing, non-empty directory is allowed; files that
/// are not overwritten by the archive are left alone.
pub(crate) fn prepare_extract_destination(
    archive: &Path,
    options: &AdapterOptions,
) -> Result<PathBuf> {
    options.validate()?;
    let derived = derive_extract_output_path(archive, options.extract_extension());
    let destination = resolve_destination(options.destination.as_deref(), derived);
    create_dir_all(&destination)?;
    debug!(archive = %archive.display(), destination = %destination.display(), "extracting");
    Ok(destination)
}

/// Resolves the path of the container created from `folder`.
pub(crate) fn archive_destination(
    folder: &Path,
    format: ContainerFormat,
    options: &AdapterOptions,
) -> Result<PathBuf> {
    options.validate()?;
    let derived =
        derive_archive_output_path(folder, options.archive_extension(format.native_extension()));
    Ok(resolve_destination(options.destination.as_deref(), derived))
}

/// Decides whether an entry is written during extraction.
pub(crate) fn should_extract(name: &str, options: &AdapterOptions) -> bool {
    options.include_all_entries || is_page(name)
}

/// Writes one entry below `destination`, creating parent directories.
///
/// Returns the number of bytes written.
pub(crate) fn write_entry<R: Read + ?Sized>(
    reader: &mut R,
    destination: &Path,
    entry_name: &str,
) -> Result<u64> {
    let output_path = destination.join(entry_relative_path(entry_name)?);

    if let Some(parent) = output_path.parent() {
        create_dir_all(parent)?;
    }

    let output_file = File::create(&output_path)?;
    let mut writer = BufWriter::with_capacity(64 * 1024, output_file);
    let bytes_written = std::io::copy(reader, &mut writer)?;
    writer.flush()?;

    Ok(bytes_written)
}

/// Deletes the source archive after a successful extraction, if requested.
pub(crate) fn finish_extract(
    archive: &Path,
    destination: &Path,
    extracted: usize,
    options: &AdapterOptions,
) -> Result<()> {
    if options.delete_original {
        std::fs::remove_file(archive)?;
        debug!(archive = %archive.display(), "deleted original archive");
    }
    info!(
        archive = %archive.display(),
        destination = %destination.display(),
        entries = extracted,
        "extraction complete"
    );
    Ok(())
}

/// Deletes the source folder after the container was written, if
/// requested.
pub(crate) fn finish_archive(
    folder: &Path,
    output: &Path,
    added: usize,
    options: &AdapterOptions,
) -> Result<()> {
    if options.delete_original {
        std::fs::remove_dir_all(folder)?;
        debug!(folder = %folder.display(), "deleted original folder");
    }
    info!(
        folder = %folder.display(),
        output = %output.display(),
        pages = added,
        "archive complete"
    );
    Ok(())
}
