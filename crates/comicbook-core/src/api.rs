//! High-level public API for one-shot comic book operations.

use std::path::Path;
use std::path::PathBuf;

use crate::AdapterOptions;
use crate::ComicBook;
use crate::Page;
use crate::Result;

/// Opens and classifies the comic book at `path`.
///
/// # Errors
///
/// Returns an error if the path does not exist or has an unsupported
/// extension.
pub fn load<P: AsRef<Path>>(path: P) -> Result<ComicBook> {
    ComicBook::open(path)
}

/// Lists the pages of the comic book at `path` in reading order.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist or is not a comic book
/// - The archive kind has no adapter
/// - The container cannot be read
///
/// # Examples
///
/// ```no_run
/// use comicbook_core::list_pages;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// for page in list_pages("Comic.cb7")? {
///     println!("{}", page.display_name());
/// }
/// # Ok(())
/// # }
/// ```
pub fn list_pages<P: AsRef<Path>>(path: P) -> Result<Vec<Page>> {
    ComicBook::open(path)?.pages()
}

/// Extracts the archive at `path` and returns the extraction folder.
///
/// # Errors
///
/// Returns an error if the path is a folder, has no adapter, or extraction
/// fails. The archive is never deleted when an error is returned.
///
/// # Examples
///
/// ```no_run
/// use comicbook_core::AdapterOptions;
/// use comicbook_core::extract;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = AdapterOptions::new().with_destination("/tmp/pages");
/// let folder = extract("Comic.cbz", &options)?;
/// println!("pages in {}", folder.display());
/// # Ok(())
/// # }
/// ```
pub fn extract<P: AsRef<Path>>(path: P, options: &AdapterOptions) -> Result<PathBuf> {
    ComicBook::open(path)?.extract(options)
}

/// Packs `folder` into a zip comic book and returns the archive path.
///
/// Use [`ComicBook::archive_as`] for other formats.
///
/// # Errors
///
/// Returns an error if `folder` is not a directory, the output already
/// exists, or writing fails.
pub fn archive<P: AsRef<Path>>(folder: P, options: &AdapterOptions) -> Result<PathBuf> {
    ComicBook::open(folder)?.archive(options)
}
