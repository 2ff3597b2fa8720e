//! Recursive page discovery in a folder.
//!
//! Folder listings and all three archivers enumerate pages through
//! [`collect_page_files`], so they agree on both membership and order.

use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use walkdir::WalkDir;

use crate::ComicBookError;
use crate::Result;
use crate::filter::is_page_path;
use crate::paths::archive_entry_name;

/// A page file found under a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFile {
    /// Full filesystem path to the file.
    pub path: PathBuf,

    /// Path relative to the walked root, `/`-separated. Used as the entry
    /// name when archiving.
    pub entry_name: String,
}

/// Collects every page file under `root`, sorted ascending by relative
/// path.
///
/// Only regular files whose names pass the page filter are returned.
/// Symlinks are not followed. A folder without pages yields an empty list.
///
/// # Errors
///
/// Returns an error if `root` cannot be read or a directory below it
/// cannot be traversed.
///
/// # Examples
///
/// ```no_run
/// use comicbook_core::walker::collect_page_files;
/// use std::path::Path;
///
/// for file in collect_page_files(Path::new("./Comic"))? {
///     println!("{}", file.entry_name);
/// }
/// # Ok::<(), comicbook_core::ComicBookError>(())
/// ```
pub fn collect_page_files(root: &Path) -> Result<Vec<PageFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| ComicBookError::Io(std::io::Error::from(e)))?;
        if !entry.file_type().is_file() || !is_page_path(entry.path()) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|_| ComicBookError::InvalidOption {
                reason: format!(
                    "path {} is not under root directory: {}",
                    entry.path().display(),
                    root.display()
                ),
            })?;
        let entry_name = archive_entry_name(relative)?;

        files.push(PageFile {
            path: entry.into_path(),
            entry_name,
        });
    }

    files.sort_by(|a, b| a.entry_name.cmp(&b.entry_name));
    debug!(root = %root.display(), pages = files.len(), "collected page files");

    Ok(files)
}
