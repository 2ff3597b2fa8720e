//! Page classification by file extension.
//!
//! Every adapter and the folder walker decide what counts as a page through
//! [`is_page`]. Content is never inspected.

use std::path::Path;

/// Extensions (lowercase, without the dot) that identify a page image.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Returns `true` if `filename` names a page image.
///
/// Only the base name is considered, so directory components never affect
/// the result. Matching is case-insensitive.
///
/// # Examples
///
/// ```
/// use comicbook_core::filter::is_page;
///
/// assert!(is_page("001.JPG"));
/// assert!(is_page("extras/readme.webp"));
/// assert!(!is_page("ComicInfo.xml"));
/// assert!(!is_page(".png"));
/// ```
#[must_use]
pub fn is_page(filename: &str) -> bool {
    extension_of(base_name(filename)).is_some_and(is_image_extension)
}

/// Returns `true` if the file at `path` is a page image, judged by name.
#[must_use]
pub fn is_page_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(is_image_extension)
}

/// Returns the last component of a container entry name.
///
/// Both `/` and `\` are treated as separators so names written by Windows
/// tools resolve the same way on every host.
#[must_use]
pub fn base_name(name: &str) -> &str {
    let trimmed = name.trim_end_matches(['/', '\\']);
    trimmed
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(trimmed)
}

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}

// Mirrors `Path::extension`: a leading dot does not start an extension.
fn extension_of(base: &str) -> Option<&str> {
    let (stem, ext) = base.rsplit_once('.')?;
    if stem.is_empty() { None } else { Some(ext) }
}
