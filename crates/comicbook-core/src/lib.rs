//! Uniform page listing, extraction and archiving for comic books.
//!
//! A comic book is either a folder of images or a single archive: `.cbz`
//! (zip), `.cb7` (7-Zip) or `.cbt` (tar). `comicbook-core` hides the
//! container behind one interface, so callers can list pages in reading
//! order, unpack an archive into a folder, or pack a folder into any of the
//! three formats.
//!
//! Only image files (`jpg`, `jpeg`, `png`, `gif`, `bmp`, `webp`) count as
//! pages.
//!
//! # Examples
//!
//! ```no_run
//! use comicbook_core::AdapterOptions;
//! use comicbook_core::ComicBook;
//! use comicbook_core::ContainerFormat;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let folder = ComicBook::open("Comic")?;
//! let archive = folder.archive_as(ContainerFormat::SevenZip, &AdapterOptions::default())?;
//!
//! for page in ComicBook::open(&archive)?.pages()? {
//!     println!("{}", page.display_name());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod container;
pub mod error;
pub mod filter;
pub mod formats;
pub mod page;
pub mod paths;
pub mod walker;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export main API types
pub use api::archive;
pub use api::extract;
pub use api::list_pages;
pub use api::load;
pub use config::AdapterOptions;
pub use config::OutputExtension;
pub use container::ComicBook;
pub use error::ComicBookError;
pub use error::Result;
pub use formats::ContainerAdapter;
pub use formats::ContainerFormat;
pub use formats::ContainerKind;
pub use page::Page;
pub use page::PageLocator;
