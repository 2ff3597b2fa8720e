//! Error types for comic book container operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ComicBookError`.
pub type Result<T> = std::result::Result<T, ComicBookError>;

/// Errors that can occur while listing, extracting or archiving comic books.
#[derive(Error, Debug)]
pub enum ComicBookError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The given path does not exist.
    #[error("path does not exist: {path}")]
    PathNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The file extension is not a known comic book format.
    #[error("unsupported file type: {extension}")]
    UnsupportedFormat {
        /// The offending extension (may be empty).
        extension: String,
    },

    /// The format is recognized but no adapter is wired for it.
    #[error("no adapter available for type: {extension}")]
    NoAdapterForFormat {
        /// The recognized extension (`cbr`, `cba`).
        extension: String,
    },

    /// The operation does not apply to this kind of container.
    #[error("cannot {operation} a {kind}")]
    InvalidOperationForKind {
        /// The attempted operation (`archive`, `extract`).
        operation: &'static str,
        /// Human-readable kind of the container.
        kind: String,
    },

    /// The output path is already taken.
    #[error("destination already exists: {path}")]
    DestinationAlreadyExists {
        /// The existing destination.
        path: PathBuf,
    },

    /// The underlying container codec rejected the data.
    #[error("invalid {format} container: {message}")]
    Codec {
        /// Codec name (`zip`, `7z`, `tar`).
        format: &'static str,
        /// Message reported by the codec.
        message: String,
    },

    /// An entry name would resolve outside the extraction directory.
    #[error("unsafe entry path in container: {entry}")]
    UnsafeEntryPath {
        /// The raw in-container entry name.
        entry: String,
    },

    /// Options failed validation.
    #[error("invalid option: {reason}")]
    InvalidOption {
        /// Why the option was rejected.
        reason: String,
    },
}

impl ComicBookError {
    /// Returns `true` if the error was raised before any container was read
    /// or written.
    ///
    /// # Examples
    ///
    /// ```
    /// use comicbook_core::ComicBookError;
    /// use std::path::PathBuf;
    ///
    /// let err = ComicBookError::DestinationAlreadyExists {
    ///     path: PathBuf::from("Comic.cbz"),
    /// };
    /// assert!(err.is_precondition());
    ///
    /// let err = ComicBookError::Codec {
    ///     format: "zip",
    ///     message: "bad central directory".into(),
    /// };
    /// assert!(!err.is_precondition());
    /// ```
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::PathNotFound { .. }
                | Self::UnsupportedFormat { .. }
                | Self::NoAdapterForFormat { .. }
                | Self::InvalidOperationForKind { .. }
                | Self::DestinationAlreadyExists { .. }
                | Self::InvalidOption { .. }
        )
    }

    /// Returns the codec or validation message carried by the error, if any.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Codec { message, .. } => Some(message),
            Self::InvalidOption { reason } => Some(reason),
            _ => None,
        }
    }

    pub(crate) fn codec(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Codec {
            format,
            message: err.to_string(),
        }
    }
}
