//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use comicbook_core::Page;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

#[derive(Serialize)]
struct PageOutput {
    name: String,
    locator: String,
}

impl From<&Page> for PageOutput {
    fn from(page: &Page) -> Self {
        Self {
            name: page.display_name().to_string(),
            locator: page.locator().to_string(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_extract_result(&self, source: &Path, destination: &Path) -> Result<()> {
        #[derive(Serialize)]
        struct ExtractOutput {
            source: String,
            destination: String,
        }

        let data = ExtractOutput {
            source: source.display().to_string(),
            destination: destination.display().to_string(),
        };
        Self::output(&JsonOutput::success("extract", data))
    }

    fn format_archive_result(&self, source: &Path, output: &Path) -> Result<()> {
        #[derive(Serialize)]
        struct ArchiveOutput {
            source: String,
            output_path: String,
        }

        let data = ArchiveOutput {
            source: source.display().to_string(),
            output_path: output.display().to_string(),
        };
        Self::output(&JsonOutput::success("archive", data))
    }

    fn format_pages(&self, source: &Path, pages: &[Page]) -> Result<()> {
        #[derive(Serialize)]
        struct PagesOutput {
            source: String,
            total_pages: usize,
            pages: Vec<PageOutput>,
        }

        let data = PagesOutput {
            source: source.display().to_string(),
            total_pages: pages.len(),
            pages: pages.iter().map(PageOutput::from).collect(),
        };
        Self::output(&JsonOutput::success("pages", data))
    }

    fn format_error(&self, operation: &str, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error(operation, format!("{error:#}"));
        let _ = Self::output(&output);
    }
}
