//! The contract every container format implements.

use std::path::Path;
use std::path::PathBuf;

use crate::AdapterOptions;
use crate::Page;
use crate::Result;

use super::detect::ContainerFormat;

/// Per-format implementation of page listing, extraction and archiving.
///
/// An adapter is bound to one path at construction: the archive file for
/// [`list_pages`](Self::list_pages) and [`extract`](Self::extract), the
/// source folder for [`archive`](Self::archive). Codec handles are opened
/// and closed within each call.
pub trait ContainerAdapter {
    /// Returns the format this adapter reads and writes.
    fn format(&self) -> ContainerFormat;

    /// Returns the path the adapter was constructed with.
    fn path(&self) -> &Path;

    /// Lists pages in reading order (ascending display name).
    ///
    /// # Errors
    ///
    /// Returns an error if the archive cannot be opened or decoded.
    fn list_pages(&self) -> Result<Vec<Page>>;

    /// Extracts pages into a directory and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive cannot be decoded, an entry name is
    /// unsafe, or writing fails. The archive is never deleted on error.
    fn extract(&self, options: &AdapterOptions) -> Result<PathBuf>;

    /// Archives the pages of the bound folder and returns the new
    /// container's path.
    ///
    /// # Errors
    ///
    /// Returns an error if the folder cannot be walked or the container
    /// cannot be written. The folder is never deleted on error.
    fn archive(&self, options: &AdapterOptions) -> Result<PathBuf>;
}
