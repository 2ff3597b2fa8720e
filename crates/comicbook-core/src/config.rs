//! Options shared by every container adapter.

use std::path::PathBuf;

use crate::ComicBookError;
use crate::Result;

/// Extension given to a derived output path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputExtension {
    /// The operation's default: the format's native extension when
    /// archiving, [`DEFAULT_EXTRACT_EXTENSION`] when extracting.
    #[default]
    Default,
    /// No extension; extraction lands in a folder named after the archive
    /// stem. When archiving this behaves like `Default`.
    Bare,
    /// A caller-chosen extension, without the leading dot.
    Custom(String),
}

/// Extension appended to extraction folders unless told otherwise.
pub const DEFAULT_EXTRACT_EXTENSION: &str = "cb";

/// Options for listing, extracting and archiving.
///
/// All fields have defaults; anything not set keeps its default behavior.
/// Unknown options cannot be expressed, so nothing is silently ignored.
///
/// # Examples
///
/// ```
/// use comicbook_core::AdapterOptions;
/// use comicbook_core::OutputExtension;
///
/// let options = AdapterOptions::new()
///     .with_destination("/tmp/out")
///     .with_extension(OutputExtension::Bare)
///     .with_delete_original(true);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterOptions {
    /// Extension used when the output path is derived.
    ///
    /// Default: [`OutputExtension::Default`].
    pub extension: OutputExtension,

    /// Explicit output path. Takes precedence over the derived path.
    ///
    /// Default: `None`.
    pub destination: Option<PathBuf>,

    /// Delete the source once the operation has fully succeeded.
    ///
    /// Default: `false`.
    pub delete_original: bool,

    /// Extract every regular file entry, not only pages. Ignored when
    /// archiving.
    ///
    /// Default: `false`.
    pub include_all_entries: bool,

    /// Deflate level (1-9) for zip output. `None` uses level 6.
    ///
    /// Default: `None`.
    pub compression_level: Option<u8>,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            extension: OutputExtension::Default,
            destination: None,
            delete_original: false,
            include_all_entries: false,
            compression_level: None,
        }
    }
}

impl AdapterOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output extension policy.
    #[must_use]
    pub fn with_extension(mut self, extension: OutputExtension) -> Self {
        self.extension = extension;
        self
    }

    /// Sets an explicit output path.
    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Sets whether the source is deleted after success.
    #[must_use]
    pub fn with_delete_original(mut self, delete: bool) -> Self {
        self.delete_original = delete;
        self
    }

    /// Sets whether extraction includes non-page files.
    #[must_use]
    pub fn with_include_all_entries(mut self, include: bool) -> Self {
        self.include_all_entries = include;
        self
    }

    /// Sets the zip compression level.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = Some(level);
        self
    }

    /// Resolves the extension for an archive of the given native extension.
    #[must_use]
    pub fn archive_extension<'a>(&'a self, native: &'a str) -> &'a str {
        match &self.extension {
            OutputExtension::Custom(ext) => ext.trim_start_matches('.'),
            OutputExtension::Default | OutputExtension::Bare => native,
        }
    }

    /// Resolves the extension for an extraction folder, `None` meaning bare.
    #[must_use]
    pub fn extract_extension(&self) -> Option<&str> {
        match &self.extension {
            OutputExtension::Default => Some(DEFAULT_EXTRACT_EXTENSION),
            OutputExtension::Bare => None,
            OutputExtension::Custom(ext) => Some(ext.trim_start_matches('.')),
        }
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A custom extension is empty or contains a path separator
    /// - The compression level is outside 1-9
    pub fn validate(&self) -> Result<()> {
        if let OutputExtension::Custom(ext) = &self.extension {
            let ext = ext.trim_start_matches('.');
            if ext.is_empty() {
                return Err(ComicBookError::InvalidOption {
                    reason: "extension must not be empty".into(),
                });
            }
            if ext.contains(['/', '\\']) {
                return Err(ComicBookError::InvalidOption {
                    reason: format!("extension must not contain a path separator: {ext}"),
                });
            }
        }

        if let Some(level) = self.compression_level
            && !(1..=9).contains(&level)
        {
            return Err(ComicBookError::InvalidOption {
                reason: format!("compression level must be 1-9, got {level}"),
            });
        }

        Ok(())
    }
}
