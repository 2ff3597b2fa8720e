//! ZIP (`.cbz`) adapter.

use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use zip::CompressionMethod;
use zip::ZipArchive;
use zip::ZipWriter;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;

use crate::AdapterOptions;
use crate::ComicBookError;
use crate::Page;
use crate::Result;
use crate::filter::is_page;
use crate::page::sort_by_display_name;
use crate::walker::collect_page_files;

use super::common;
use super::detect::ContainerFormat;
use super::traits::ContainerAdapter;

const DEFAULT_COMPRESSION_LEVEL: u8 = 6;

/// Adapter for ZIP comic books.
///
/// # Examples
///
/// ```no_run
/// use comicbook_core::formats::ContainerAdapter;
/// use comicbook_core::formats::ZipAdapter;
///
/// let adapter = ZipAdapter::new("Comic.cbz");
/// for page in adapter.list_pages()? {
///     println!("{}", page.display_name());
/// }
/// # Ok::<(), comicbook_core::ComicBookError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ZipAdapter {
    path: PathBuf,
}

impl ZipAdapter {
    /// Creates an adapter bound to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> Result<ZipArchive<BufReader<File>>> {
        let file = File::open(&self.path)?;
        ZipArchive::new(BufReader::new(file)).map_err(zip_error)
    }
}

impl ContainerAdapter for ZipAdapter {
    fn format(&self) -> ContainerFormat {
        ContainerFormat::Zip
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn list_pages(&self) -> Result<Vec<Page>> {
        let mut archive = self.open()?;
        let mut pages = Vec::new();

        for i in 0..archive.len() {
            let entry = archive.by_index_raw(i).map_err(zip_error)?;
            if entry.is_dir() || !is_page(entry.name()) {
                continue;
            }
            pages.push(Page::from_entry(entry.name()));
        }

        sort_by_display_name(&mut pages);
        debug!(archive = %self.path.display(), pages = pages.len(), "listed zip pages");
        Ok(pages)
    }

    fn extract(&self, options: &AdapterOptions) -> Result<PathBuf> {
        let mut archive = self.open()?;
        let destination = common::prepare_extract_destination(&self.path, options)?;
        let mut extracted = 0;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).map_err(zip_error)?;
            if entry.is_dir() || !common::should_extract(entry.name(), options) {
                continue;
            }
            let name = entry.name().to_string();
            common::write_entry(&mut entry, &destination, &name)?;
            extracted += 1;
        }
        drop(archive);

        common::finish_extract(&self.path, &destination, extracted, options)?;
        Ok(destination)
    }

    fn archive(&self, options: &AdapterOptions) -> Result<PathBuf> {
        let output = common::archive_destination(&self.path, self.format(), options)?;
        let files = collect_page_files(&self.path)?;

        let level = options
            .compression_level
            .unwrap_or(DEFAULT_COMPRESSION_LEVEL);
        let file_options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(level)));

        let mut zip = ZipWriter::new(File::create(&output)?);
        for page in &files {
            zip.start_file(page.entry_name.as_str(), file_options)
                .map_err(zip_error)?;
            let mut source = File::open(&page.path)?;
            std::io::copy(&mut source, &mut zip)?;
        }
        let mut written = zip.finish().map_err(zip_error)?;
        written.flush()?;

        common::finish_archive(&self.path, &output, files.len(), options)?;
        Ok(output)
    }
}

fn zip_error(err: ZipError) -> ComicBookError {
    match err {
        ZipError::Io(e) => ComicBookError::Io(e),
        other => ComicBookError::codec(ContainerFormat::Zip.name(), other),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_zip;
    use crate::test_utils::page_names;
    use std::fs;
    use tempfile::TempDir;

    fn write_zip(dir: &Path, name: &str, entries: Vec<(&str, &[u8])>) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, create_test_zip(entries)).unwrap();
        path
    }

    #[test]
    fn test_list_pages_sorted_by_display_name() {
        let temp = TempDir::new().unwrap();
        let path = write_zip(
            temp.path(),
            "book.cbz",
            vec![
                ("z/003.png", b"3"),
                ("001.jpg", b"1"),
                ("ComicInfo.xml", b"<x/>"),
                ("a/002.GIF", b"2"),
            ],
        );

        let pages = ZipAdapter::new(&path).list_pages().unwrap();
        assert_eq!(page_names(&pages), ["001.jpg", "002.GIF", "003.png"]);
        assert_eq!(pages[2].entry_name(), Some("z/003.png"));
    }

    #[test]
    fn test_list_pages_skips_directory_entries() {
        let temp = TempDir::new().unwrap();
        let path = write_zip(
            temp.path(),
            "book.cbz",
            vec![("covers.jpg/", b""), ("covers.jpg/front.jpg", b"f")],
        );

        let pages = ZipAdapter::new(&path).list_pages().unwrap();
        assert_eq!(page_names(&pages), ["front.jpg"]);
    }

    #[test]
    fn test_list_pages_corrupt_archive() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.cbz");
        fs::write(&path, b"definitely not a zip").unwrap();

        let result = ZipAdapter::new(&path).list_pages();
        assert!(matches!(
            result,
            Err(ComicBookError::Codec { format: "zip", .. })
        ));
    }

    #[test]
    fn test_extract_pages_only() {
        let temp = TempDir::new().unwrap();
        let path = write_zip(
            temp.path(),
            "book.cbz",
            vec![
                ("ch1/001.jpg", b"one"),
                ("ComicInfo.xml", b"<x/>"),
                ("002.png", b"two"),
            ],
        );

        let dest = ZipAdapter::new(&path)
            .extract(&AdapterOptions::default())
            .unwrap();
        assert_eq!(dest, temp.path().join("book.cb"));
        assert_eq!(fs::read(dest.join("ch1/001.jpg")).unwrap(), b"one");
        assert_eq!(fs::read(dest.join("002.png")).unwrap(), b"two");
        assert!(!dest.join("ComicInfo.xml").exists());
        assert!(path.exists());
    }

    #[test]
    fn test_extract_include_all_entries() {
        let temp = TempDir::new().unwrap();
        let path = write_zip(
            temp.path(),
            "book.cbz",
            vec![("001.jpg", b"one"), ("ComicInfo.xml", b"<x/>")],
        );
        let options = AdapterOptions::new().with_include_all_entries(true);

        let dest = ZipAdapter::new(&path).extract(&options).unwrap();
        assert!(dest.join("ComicInfo.xml").exists());
    }

    #[test]
    fn test_extract_delete_original() {
        let temp = TempDir::new().unwrap();
        let path = write_zip(temp.path(), "book.cbz", vec![("001.jpg", b"one")]);
        let options = AdapterOptions::new().with_delete_original(true);

        let dest = ZipAdapter::new(&path).extract(&options).unwrap();
        assert!(dest.join("001.jpg").exists());
        assert!(!path.exists());
    }

    #[test]
    fn test_extract_failure_keeps_original() {
        let temp = TempDir::new().unwrap();
        let path = write_zip(
            temp.path(),
            "book.cbz",
            vec![("001.jpg", b"one"), ("../escape.jpg", b"evil")],
        );
        let options = AdapterOptions::new().with_delete_original(true);

        let result = ZipAdapter::new(&path).extract(&options);
        assert!(matches!(result, Err(ComicBookError::UnsafeEntryPath { .. })));
        assert!(path.exists());
        assert!(!temp.path().join("escape.jpg").exists());
    }

    #[test]
    fn test_archive_writes_sorted_entries() {
        let temp = TempDir::new().unwrap();
        let folder = temp.path().join("Book");
        fs::create_dir_all(folder.join("c")).unwrap();
        fs::write(folder.join("b.png"), b"b").unwrap();
        fs::write(folder.join("a.jpg"), b"a").unwrap();
        fs::write(folder.join("c/d.gif"), b"d").unwrap();
        fs::write(folder.join("notes.txt"), b"n").unwrap();

        let output = ZipAdapter::new(&folder)
            .archive(&AdapterOptions::default())
            .unwrap();
        assert_eq!(output, temp.path().join("Book.cbz"));

        let mut archive = ZipArchive::new(File::open(&output).unwrap()).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names, ["a.jpg", "b.png", "c/d.gif"]);
        assert!(folder.exists());
    }

    #[test]
    fn test_archive_empty_folder() {
        let temp = TempDir::new().unwrap();
        let folder = temp.path().join("Empty");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("readme.txt"), b"no pages").unwrap();

        let output = ZipAdapter::new(&folder)
            .archive(&AdapterOptions::default())
            .unwrap();
        let archive = ZipArchive::new(File::open(&output).unwrap()).unwrap();
        assert_eq!(archive.len(), 0);
        assert!(ZipAdapter::new(&output).list_pages().unwrap().is_empty());
    }

    #[test]
    fn test_archive_delete_original() {
        let temp = TempDir::new().unwrap();
        let folder = temp.path().join("Book");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("001.jpg"), b"1").unwrap();
        let options = AdapterOptions::new().with_delete_original(true);

        let output = ZipAdapter::new(&folder).archive(&options).unwrap();
        assert!(output.exists());
        assert!(!folder.exists());
    }

    #[test]
    fn test_archive_write_failure_keeps_folder() {
        let temp = TempDir::new().unwrap();
        let folder = temp.path().join("Book");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("001.jpg"), b"1").unwrap();
        let options = AdapterOptions::new()
            .with_destination(temp.path().join("missing/Book.cbz"))
            .with_delete_original(true);

        let result = ZipAdapter::new(&folder).archive(&options);
        assert!(matches!(result, Err(ComicBookError::Io(_))));
        assert!(folder.join("001.jpg").exists());
    }

    #[test]
    fn test_extract_write_failure_keeps_original() {
        let temp = TempDir::new().unwrap();
        let path = write_zip(temp.path(), "book.cbz", vec![("sub/001.jpg", b"one")]);
        let dest = temp.path().join("out");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("sub"), b"not a directory").unwrap();
        let options = AdapterOptions::new()
            .with_destination(&dest)
            .with_delete_original(true);

        let result = ZipAdapter::new(&path).extract(&options);
        assert!(matches!(result, Err(ComicBookError::Io(_))));
        assert!(path.exists());
    }

    #[test]
    fn test_archive_compression_level_stored_data_roundtrip() {
        let temp = TempDir::new().unwrap();
        let folder = temp.path().join("Book");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("001.jpg"), vec![7u8; 4096]).unwrap();
        let options = AdapterOptions::new().with_compression_level(9);

        let output = ZipAdapter::new(&folder).archive(&options).unwrap();
        let dest = ZipAdapter::new(&output)
            .extract(&AdapterOptions::default())
            .unwrap();
        assert_eq!(fs::read(dest.join("001.jpg")).unwrap(), vec![7u8; 4096]);
    }
}
