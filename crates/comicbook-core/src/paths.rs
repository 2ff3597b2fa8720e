//! Output path planning and in-container path conversion.
//!
//! Everything here is pure path arithmetic: nothing touches the filesystem,
//! and existence checks are left to callers.
//!
//! Two separator conventions meet in this module. Entry names inside a
//! container always use `/`, whatever host wrote them; paths outside a
//! container follow the host. [`entry_relative_path`] and
//! [`archive_entry_name`] are the only crossings between the two.

use std::ffi::OsString;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::ComicBookError;
use crate::Result;

/// Derives the default container path for archiving `source_folder`.
///
/// The result is a sibling of the folder with the folder's extension (if it
/// has one) replaced by `extension`.
///
/// # Examples
///
/// ```
/// use comicbook_core::paths::derive_archive_output_path;
/// use std::path::Path;
///
/// let out = derive_archive_output_path(Path::new("/x/Comic"), "cbz");
/// assert_eq!(out, Path::new("/x/Comic.cbz"));
/// ```
#[must_use]
pub fn derive_archive_output_path(source_folder: &Path, extension: &str) -> PathBuf {
    sibling_with_extension(source_folder, Some(extension))
}

/// Derives the default extraction directory for `archive`.
///
/// The archive's extension is stripped; `extension` is appended when it is
/// `Some` and non-empty, otherwise the bare base name is used.
///
/// # Examples
///
/// ```
/// use comicbook_core::paths::derive_extract_output_path;
/// use std::path::Path;
///
/// let archive = Path::new("/a/Comic.cbz");
/// assert_eq!(derive_extract_output_path(archive, None), Path::new("/a/Comic"));
/// assert_eq!(
///     derive_extract_output_path(archive, Some("cb")),
///     Path::new("/a/Comic.cb")
/// );
/// ```
#[must_use]
pub fn derive_extract_output_path(archive: &Path, extension: Option<&str>) -> PathBuf {
    sibling_with_extension(archive, extension)
}

/// Picks the explicit override when present, otherwise the derived path.
///
/// Overrides are normalized to absolute form but otherwise returned as given.
#[must_use]
pub fn resolve_destination(destination: Option<&Path>, derived: PathBuf) -> PathBuf {
    destination.map_or(derived, normalize_absolute)
}

/// Makes `path` absolute and resolves `.` and `..` lexically.
///
/// Symlinks are not followed and the path need not exist. `..` at the root
/// stays at the root.
///
/// # Examples
///
/// ```
/// use comicbook_core::paths::normalize_absolute;
/// use std::path::Path;
///
/// assert_eq!(normalize_absolute(Path::new("/a/./b/../c")), Path::new("/a/c"));
/// ```
#[must_use]
pub fn normalize_absolute(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Converts an in-container entry name into a relative host path.
///
/// Both `/` and `\` separate components. Empty and `.` components are
/// dropped.
///
/// # Errors
///
/// Returns [`ComicBookError::UnsafeEntryPath`] if the name is absolute, has
/// a drive prefix, contains `..`, or has no components at all.
///
/// # Examples
///
/// ```
/// use comicbook_core::paths::entry_relative_path;
/// use std::path::PathBuf;
///
/// let rel = entry_relative_path("ch1/./001.jpg").unwrap();
/// assert_eq!(rel, PathBuf::from("ch1").join("001.jpg"));
/// assert!(entry_relative_path("../escape.jpg").is_err());
/// assert!(entry_relative_path("/etc/passwd").is_err());
/// ```
pub fn entry_relative_path(name: &str) -> Result<PathBuf> {
    let unsafe_entry = || ComicBookError::UnsafeEntryPath {
        entry: name.to_string(),
    };

    if name.starts_with(['/', '\\']) {
        return Err(unsafe_entry());
    }

    let mut relative = PathBuf::new();
    for part in name.split(['/', '\\']) {
        match part {
            "" | "." => {}
            ".." => return Err(unsafe_entry()),
            part if part.contains(':') && cfg!(windows) => return Err(unsafe_entry()),
            part => relative.push(part),
        }
    }

    if relative.as_os_str().is_empty() {
        return Err(unsafe_entry());
    }
    Ok(relative)
}

/// Joins the components of a relative host path with `/` to form an
/// in-container entry name.
///
/// # Errors
///
/// Returns [`ComicBookError::InvalidOption`] if the path is not relative or
/// is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use comicbook_core::paths::archive_entry_name;
/// use std::path::Path;
///
/// let name = archive_entry_name(&Path::new("c").join("d.gif")).unwrap();
/// assert_eq!(name, "c/d.gif");
/// ```
pub fn archive_entry_name(relative: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| ComicBookError::InvalidOption {
                    reason: format!("path is not valid UTF-8: {}", relative.display()),
                })?;
                parts.push(part);
            }
            Component::CurDir => {}
            _ => {
                return Err(ComicBookError::InvalidOption {
                    reason: format!("expected a relative path: {}", relative.display()),
                });
            }
        }
    }
    Ok(parts.join("/"))
}

fn sibling_with_extension(path: &Path, extension: Option<&str>) -> PathBuf {
    let path = normalize_absolute(path);
    let mut name: OsString = path
        .file_stem()
        .map_or_else(OsString::new, ToOwned::to_owned);

    if let Some(ext) = extension.map(|e| e.trim_start_matches('.'))
        && !ext.is_empty()
    {
        name.push(".");
        name.push(ext);
    }

    path.with_file_name(name)
}
