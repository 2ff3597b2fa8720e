//! Container format adapters.

mod common;
pub mod detect;
pub mod sevenz;
pub mod tar;
pub mod traits;
pub mod zip;

use std::path::PathBuf;

// Re-export main types for convenience
pub use detect::ContainerFormat;
pub use detect::ContainerKind;
pub use sevenz::SevenZipAdapter;
pub use tar::TarAdapter;
pub use traits::ContainerAdapter;
pub use zip::ZipAdapter;

/// Builds the adapter for `format`, bound to `path`.
///
/// # Examples
///
/// ```
/// use comicbook_core::formats::ContainerFormat;
/// use comicbook_core::formats::adapter_for;
///
/// let adapter = adapter_for(ContainerFormat::Tar, "Comic.cbt");
/// assert_eq!(adapter.format(), ContainerFormat::Tar);
/// ```
#[must_use]
pub fn adapter_for(format: ContainerFormat, path: impl Into<PathBuf>) -> Box<dyn ContainerAdapter> {
    match format {
        ContainerFormat::Zip => Box::new(ZipAdapter::new(path)),
        ContainerFormat::SevenZip => Box::new(SevenZipAdapter::new(path)),
        ContainerFormat::Tar => Box::new(TarAdapter::new(path)),
    }
}
