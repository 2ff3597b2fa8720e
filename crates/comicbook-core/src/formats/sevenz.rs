//! 7-Zip (`.cb7`) adapter.
//!
//! Listing reads only the archive header. Extraction streams every entry
//! through the decoder, since 7z folders are usually solid and a single
//! page cannot be reached without decoding what precedes it. Entries that
//! are not extracted are drained and discarded.
//!
//! Encrypted archives are out of scope and surface as codec errors.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use sevenz_rust2::Archive;
use sevenz_rust2::ArchiveEntry;
use sevenz_rust2::ArchiveReader;
use sevenz_rust2::ArchiveWriter;
use sevenz_rust2::Password;
use tracing::debug;

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

/// Adapter for 7-Zip comic books.
#[derive(Debug, Clone)]
pub struct SevenZipAdapter {
    path: PathBuf,
}

impl SevenZipAdapter {
    /// Creates an adapter bound to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContainerAdapter for SevenZipAdapter {
    fn format(&self) -> ContainerFormat {
        ContainerFormat::SevenZip
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn list_pages(&self) -> Result<Vec<Page>> {
        let mut source = BufReader::new(File::open(&self.path)?);
        let archive = Archive::read(&mut source, &Password::empty()).map_err(sevenz_error)?;

        let mut pages: Vec<Page> = archive
            .files
            .iter()
            .filter(|entry| !entry.is_directory() && is_page(&entry.name))
            .map(|entry| Page::from_entry(entry.name.as_str()))
            .collect();

        sort_by_display_name(&mut pages);
        debug!(archive = %self.path.display(), pages = pages.len(), "listed 7z pages");
        Ok(pages)
    }

    fn extract(&self, options: &AdapterOptions) -> Result<PathBuf> {
        let source = BufReader::new(File::open(&self.path)?);
        let mut reader = ArchiveReader::new(source, Password::empty()).map_err(sevenz_error)?;
        let destination = common::prepare_extract_destination(&self.path, options)?;

        // The callback can only return codec errors, so ours are parked
        // here and the walk is stopped.
        let mut failure: Option<ComicBookError> = None;
        let mut extracted = 0;

        reader
            .for_each_entries(|entry: &ArchiveEntry, data: &mut dyn Read| {
                if entry.is_directory() || !common::should_extract(&entry.name, options) {
                    std::io::copy(data, &mut std::io::sink())?;
                    return Ok(true);
                }
                match common::write_entry(data, &destination, &entry.name) {
                    Ok(_) => {
                        extracted += 1;
                        Ok(true)
                    }
                    Err(e) => {
                        failure = Some(e);
                        Ok(false)
                    }
                }
            })
            .map_err(sevenz_error)?;
        drop(reader);

        if let Some(err) = failure {
            return Err(err);
        }

        common::finish_extract(&self.path, &destination, extracted, options)?;
        Ok(destination)
    }

    fn archive(&self, options: &AdapterOptions) -> Result<PathBuf> {
        let output = common::archive_destination(&self.path, self.format(), options)?;
        let files = collect_page_files(&self.path)?;

        let mut writer = ArchiveWriter::new(File::create(&output)?).map_err(sevenz_error)?;
        for page in &files {
            let entry = ArchiveEntry::from_path(&page.path, page.entry_name.clone());
            let source = File::open(&page.path)?;
            writer
                .push_archive_entry(entry, Some(source))
                .map_err(sevenz_error)?;
        }
        let written = writer.finish()?;
        written.sync_all()?;

        common::finish_archive(&self.path, &output, files.len(), options)?;
        Ok(output)
    }
}

fn sevenz_error(err: sevenz_rust2::Error) -> ComicBookError {
    ComicBookError::codec(ContainerFormat::SevenZip.name(), err)
}
