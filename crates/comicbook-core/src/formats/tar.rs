//! TAR (`.cbt`) adapter.
//!
//! Only uncompressed tar is read and written. Entries other than regular
//! files (directories, links, devices) are never treated as pages.

use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use tar::Archive;
use tar::Builder;
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

/// Adapter for TAR comic books.
#[derive(Debug, Clone)]
pub struct TarAdapter {
    path: PathBuf,
}

impl TarAdapter {
    /// Creates an adapter bound to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> Result<Archive<BufReader<File>>> {
        let file = File::open(&self.path)?;
        Ok(Archive::new(BufReader::new(file)))
    }
}

impl ContainerAdapter for TarAdapter {
    fn format(&self) -> ContainerFormat {
        ContainerFormat::Tar
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn list_pages(&self) -> Result<Vec<Page>> {
        let mut archive = self.open()?;
        let mut pages = Vec::new();

        for entry in archive.entries().map_err(tar_error)? {
            let entry = entry.map_err(tar_error)?;
            if !entry.header().entry_type().is_file() {
                continue;
            }
            let name = entry_name(&entry);
            if is_page(&name) {
                pages.push(Page::from_entry(name));
            }
        }

        sort_by_display_name(&mut pages);
        debug!(archive = %self.path.display(), pages = pages.len(), "listed tar pages");
        Ok(pages)
    }

    fn extract(&self, options: &AdapterOptions) -> Result<PathBuf> {
        let mut archive = self.open()?;
        let destination = common::prepare_extract_destination(&self.path, options)?;
        let mut extracted = 0;

        for entry in archive.entries().map_err(tar_error)? {
            let mut entry = entry.map_err(tar_error)?;
            if !entry.header().entry_type().is_file() {
                continue;
            }
            let name = entry_name(&entry);
            if !common::should_extract(&name, options) {
                continue;
            }
            let expected = entry.size();
            let written = common::write_entry(&mut entry, &destination, &name)?;
            if written != expected {
                return Err(ComicBookError::codec(
                    ContainerFormat::Tar.name(),
                    format!("entry {name} is truncated ({written} of {expected} bytes)"),
                ));
            }
            extracted += 1;
        }
        drop(archive);

        common::finish_extract(&self.path, &destination, extracted, options)?;
        Ok(destination)
    }

    fn archive(&self, options: &AdapterOptions) -> Result<PathBuf> {
        let output = common::archive_destination(&self.path, self.format(), options)?;
        let files = collect_page_files(&self.path)?;

        let mut builder = Builder::new(File::create(&output)?);
        for page in &files {
            builder.append_path_with_name(&page.path, &page.entry_name)?;
        }
        let mut written = builder.into_inner()?;
        written.flush()?;

        common::finish_archive(&self.path, &output, files.len(), options)?;
        Ok(output)
    }
}

// Raw header bytes keep the `/` separators as stored, on every host.
fn entry_name<R: std::io::Read>(entry: &tar::Entry<'_, R>) -> String {
    String::from_utf8_lossy(&entry.path_bytes()).into_owned()
}

fn tar_error(err: std::io::Error) -> ComicBookError {
    ComicBookError::codec(ContainerFormat::Tar.name(), err)
}
