//! Page values produced by listings.

use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use crate::filter::base_name;

/// Where a page's bytes live.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageLocator {
    /// Entry name inside an archive, always `/`-separated.
    Entry(String),
    /// Absolute filesystem path, for folder-backed comic books.
    File(PathBuf),
}

impl fmt::Display for PageLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entry(name) => f.write_str(name),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One image within a comic book.
///
/// The display name is always the base name of the locator; the fields are
/// private so the two cannot drift apart.
///
/// # Examples
///
/// ```
/// use comicbook_core::Page;
///
/// let page = Page::from_entry("chapter1/001.jpg");
/// assert_eq!(page.display_name(), "001.jpg");
/// assert_eq!(page.locator().to_string(), "chapter1/001.jpg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Page {
    locator: PageLocator,
    display_name: String,
}

impl Page {
    /// Creates a page for an archive entry.
    #[must_use]
    pub fn from_entry(name: impl Into<String>) -> Self {
        let name = name.into();
        let display_name = base_name(&name).to_string();
        Self {
            locator: PageLocator::Entry(name),
            display_name,
        }
    }

    /// Creates a page for a file on disk.
    #[must_use]
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            locator: PageLocator::File(path),
            display_name,
        }
    }

    /// Returns the locator used to fetch this page's bytes.
    #[must_use]
    pub const fn locator(&self) -> &PageLocator {
        &self.locator
    }

    /// Returns the base file name of the page.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the entry name if this page lives in an archive.
    #[must_use]
    pub fn entry_name(&self) -> Option<&str> {
        match &self.locator {
            PageLocator::Entry(name) => Some(name),
            PageLocator::File(_) => None,
        }
    }

    /// Returns the filesystem path if this page lives in a folder.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        match &self.locator {
            PageLocator::Entry(_) => None,
            PageLocator::File(path) => Some(path),
        }
    }
}

/// Sorts archive pages into reading order: ascending display name.
///
/// The sort is stable, so pages sharing a base name keep codec order.
pub(crate) fn sort_by_display_name(pages: &mut [Page]) {
    pages.sort_by(|a, b| a.display_name.cmp(&b.display_name));
}
