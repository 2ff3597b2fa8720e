//! The comic book facade.

use std::path::Path;
use std::path::PathBuf;

use tracing::debug;

use crate::AdapterOptions;
use crate::ComicBookError;
use crate::Page;
use crate::Result;
use crate::formats::ContainerAdapter;
use crate::formats::ContainerFormat;
use crate::formats::ContainerKind;
use crate::formats::adapter_for;
use crate::formats::detect::classify_extension;
use crate::paths::derive_archive_output_path;
use crate::paths::normalize_absolute;
use crate::paths::resolve_destination;
use crate::walker::collect_page_files;

/// A comic book on disk: either a folder of images or a single archive.
///
/// The kind is decided once, when the comic book is opened, and every
/// operation dispatches on it.
///
/// # Examples
///
/// ```no_run
/// use comicbook_core::AdapterOptions;
/// use comicbook_core::ComicBook;
///
/// let book = ComicBook::open("Comic.cbz")?;
/// for page in book.pages()? {
///     println!("{}", page.display_name());
/// }
/// let folder = book.extract(&AdapterOptions::default())?;
/// println!("extracted to {}", folder.display());
/// # Ok::<(), comicbook_core::ComicBookError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComicBook {
    path: PathBuf,
    kind: ContainerKind,
}

impl ComicBook {
    /// Opens the comic book at `path`.
    ///
    /// Surrounding whitespace is trimmed and the path is made absolute.
    /// Directories are folder comic books; files are classified by their
    /// extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path does not exist
    /// - The path is a file with an extension that is not a comic book
    ///   extension
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let trimmed = path.to_str().map_or(path, |s| Path::new(s.trim()));
        let path = normalize_absolute(trimmed);

        if !path.exists() {
            return Err(ComicBookError::PathNotFound { path });
        }

        let kind = if path.is_dir() {
            ContainerKind::Folder
        } else {
            classify_extension(&path)?
        };

        debug!(path = %path.display(), kind = %kind, "opened comic book");
        Ok(Self { path, kind })
    }

    /// Returns the absolute path of the comic book.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns what the comic book is.
    #[must_use]
    pub const fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    /// Returns the archive format, or `None` for folders and archives
    /// without an adapter.
    #[must_use]
    pub const fn format(&self) -> Option<ContainerFormat> {
        self.kind.format()
    }

    /// Lists the pages in reading order.
    ///
    /// Archive pages are ordered by file name; folder pages by their path
    /// relative to the folder.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive has no adapter, cannot be decoded,
    /// or the folder cannot be walked.
    pub fn pages(&self) -> Result<Vec<Page>> {
        if self.kind.is_folder() {
            let files = collect_page_files(&self.path)?;
            return Ok(files.into_iter().map(|f| Page::from_file(f.path)).collect());
        }
        self.adapter()?.list_pages()
    }

    /// Packs a folder comic book into a zip archive.
    ///
    /// # Errors
    ///
    /// See [`ComicBook::archive_as`].
    pub fn archive(&self, options: &AdapterOptions) -> Result<PathBuf> {
        self.archive_as(ContainerFormat::Zip, options)
    }

    /// Packs a folder comic book into an archive of the given format.
    ///
    /// Returns the path of the created archive.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - This comic book is not a folder
    /// - The options are invalid
    /// - The output path already exists
    /// - Writing the archive fails
    pub fn archive_as(&self, format: ContainerFormat, options: &AdapterOptions) -> Result<PathBuf> {
        if !self.kind.is_folder() {
            return Err(self.invalid_operation("archive"));
        }
        options.validate()?;

        let derived = derive_archive_output_path(
            &self.path,
            options.archive_extension(format.native_extension()),
        );
        let output = resolve_destination(options.destination.as_deref(), derived);
        if output.exists() {
            return Err(ComicBookError::DestinationAlreadyExists { path: output });
        }

        adapter_for(format, self.path.clone()).archive(options)
    }

    /// Unpacks an archive comic book into a folder.
    ///
    /// Returns the path of the extraction folder.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - This comic book is a folder
    /// - The archive has no adapter
    /// - The options are invalid
    /// - Decoding or writing fails
    pub fn extract(&self, options: &AdapterOptions) -> Result<PathBuf> {
        if self.kind.is_folder() {
            return Err(self.invalid_operation("extract"));
        }
        self.adapter()?.extract(options)
    }

    /// Returns the adapter for this archive.
    ///
    /// # Errors
    ///
    /// Returns [`ComicBookError::NoAdapterForFormat`] for recognized archives
    /// that cannot be read, and
    /// [`ComicBookError::InvalidOperationForKind`] for folders.
    pub fn adapter(&self) -> Result<Box<dyn ContainerAdapter>> {
        match &self.kind {
            ContainerKind::Folder => Err(self.invalid_operation("open an adapter for")),
            ContainerKind::UnsupportedArchive(extension) => {
                Err(ComicBookError::NoAdapterForFormat {
                    extension: extension.clone(),
                })
            }
            kind => match kind.format() {
                Some(format) => Ok(adapter_for(format, self.path.clone())),
                None => Err(self.invalid_operation("open an adapter for")),
            },
        }
    }

    fn invalid_operation(&self, operation: &'static str) -> ComicBookError {
        ComicBookError::InvalidOperationForKind {
            operation,
            kind: self.kind.to_string(),
        }
    }
}
