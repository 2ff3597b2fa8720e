//! Container classification.

use std::fmt;
use std::path::Path;

use crate::ComicBookError;
use crate::Result;

/// Archive formats with a working adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerFormat {
    /// ZIP archive (`.cbz`).
    Zip,
    /// 7-Zip archive (`.cb7`).
    SevenZip,
    /// Uncompressed TAR archive (`.cbt`).
    Tar,
}

impl ContainerFormat {
    /// All formats with an adapter.
    pub const ALL: [Self; 3] = [Self::Zip, Self::SevenZip, Self::Tar];

    /// Returns the comic book extension for this format.
    #[must_use]
    pub const fn native_extension(self) -> &'static str {
        match self {
            Self::Zip => "cbz",
            Self::SevenZip => "cb7",
            Self::Tar => "cbt",
        }
    }

    /// Returns the codec name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::SevenZip => "7z",
            Self::Tar => "tar",
        }
    }

    /// Looks up a format by comic book extension, case-insensitively.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.native_extension().eq_ignore_ascii_case(extension))
    }
}

impl fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extensions that are known comic book formats without an adapter.
pub const RECOGNIZED_WITHOUT_ADAPTER: [&str; 2] = ["cbr", "cba"];

/// What a path turned out to be.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// A directory of page images.
    Folder,
    /// A `.cbz` file.
    Zip,
    /// A `.cb7` file.
    SevenZip,
    /// A `.cbt` file.
    Tar,
    /// A recognized comic book extension with no adapter (`cbr`, `cba`).
    UnsupportedArchive(String),
}

impl ContainerKind {
    /// Returns the archive format, if this kind has an adapter.
    #[must_use]
    pub const fn format(&self) -> Option<ContainerFormat> {
        match self {
            Self::Zip => Some(ContainerFormat::Zip),
            Self::SevenZip => Some(ContainerFormat::SevenZip),
            Self::Tar => Some(ContainerFormat::Tar),
            Self::Folder | Self::UnsupportedArchive(_) => None,
        }
    }

    /// Returns `true` for folder-backed comic books.
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        matches!(self, Self::Folder)
    }
}

impl From<ContainerFormat> for ContainerKind {
    fn from(format: ContainerFormat) -> Self {
        match format {
            ContainerFormat::Zip => Self::Zip,
            ContainerFormat::SevenZip => Self::SevenZip,
            ContainerFormat::Tar => Self::Tar,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder => f.write_str("folder"),
            Self::UnsupportedArchive(ext) => write!(f, "{ext} archive"),
            other => match other.format() {
                Some(format) => write!(f, "{format} archive"),
                None => f.write_str("container"),
            },
        }
    }
}

/// Classifies a file path by its extension.
///
/// Directories are classified by the caller; this only looks at the name.
///
/// # Errors
///
/// Returns [`ComicBookError::UnsupportedFormat`] if the extension is not a
/// comic book extension.
///
/// # Examples
///
/// ```
/// use comicbook_core::formats::detect::ContainerKind;
/// use comicbook_core::formats::detect::classify_extension;
/// use std::path::Path;
///
/// assert_eq!(classify_extension(Path::new("a.CBZ")).unwrap(), ContainerKind::Zip);
/// assert_eq!(
///     classify_extension(Path::new("a.cbr")).unwrap(),
///     ContainerKind::UnsupportedArchive("cbr".into())
/// );
/// assert!(classify_extension(Path::new("a.pdf")).is_err());
/// ```
pub fn classify_extension(path: &Path) -> Result<ContainerKind> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if let Some(format) = ContainerFormat::from_extension(&extension) {
        return Ok(format.into());
    }
    if RECOGNIZED_WITHOUT_ADAPTER.contains(&extension.as_str()) {
        return Ok(ContainerKind::UnsupportedArchive(extension));
    }
    Err(ComicBookError::UnsupportedFormat { extension })
}
