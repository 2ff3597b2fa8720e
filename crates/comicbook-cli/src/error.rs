//! Error conversion utilities for CLI.
//!
//! Converts comicbook-core's typed errors (thiserror) into user-facing
//! errors (anyhow), adding guidance where the user can act on it.

use anyhow::anyhow;
use comicbook_core::ComicBookError;
use std::path::Path;

/// Converts `ComicBookError` to a user-facing anyhow error
pub fn convert_comicbook_error(err: ComicBookError, source: &Path) -> anyhow::Error {
    let detail = err.context().unwrap_or_default().to_string();
    match err {
        ComicBookError::NoAdapterForFormat { extension } => {
            anyhow!(
                "No adapter available for type: {extension}\n\
                 HINT: Supported formats: cbz, cb7, cbt"
            )
        }
        ComicBookError::UnsupportedFormat { extension } => {
            anyhow!(
                "Unsupported file type: {}\n\
                 HINT: Supported formats: cbz, cb7, cbt",
                if extension.is_empty() {
                    source.display().to_string()
                } else {
                    format!(".{extension}")
                }
            )
        }
        ComicBookError::Codec { format, .. } => {
            anyhow!(
                "Invalid {format} archive '{}': {detail}\n\
                 HINT: The archive may be corrupted or use an unsupported feature.",
                source.display()
            )
        }
        ComicBookError::UnsafeEntryPath { entry } => {
            anyhow!(
                "Archive '{}' contains an entry outside the output folder: {entry}\n\
                 HINT: Nothing was deleted. Do not extract archives from untrusted sources.",
                source.display()
            )
        }
        ComicBookError::InvalidOption { .. } => {
            anyhow!(
                "Invalid option: {detail}\n\
                 HINT: Run 'comicbook <COMMAND> --help' for accepted values."
            )
        }
        ComicBookError::Io(io_err) => {
            anyhow!("I/O error while processing '{}': {io_err}", source.display())
        }
        other => anyhow::Error::from(other),
    }
}

/// Adds source context to a comicbook-core result
pub fn add_source_context<T>(
    result: Result<T, ComicBookError>,
    source: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_comicbook_error(e, source))
}
