//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use comicbook_core::Page;
use console::Term;
use console::style;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn write_success(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }

    fn page_line(index: usize, page: &Page, verbose: bool) -> String {
        if verbose {
            format!("{:>4}  {}  ({})", index + 1, page.display_name(), page.locator())
        } else {
            page.display_name().to_string()
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_extract_result(&self, source: &Path, destination: &Path) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_success(&format!(
            "Extracted {} to {}",
            source.display(),
            destination.display()
        ));
        Ok(())
    }

    fn format_archive_result(&self, source: &Path, output: &Path) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_success(&format!(
            "Archived {} to {}",
            source.display(),
            output.display()
        ));
        Ok(())
    }

    fn format_pages(&self, source: &Path, pages: &[Page]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for (index, page) in pages.iter().enumerate() {
            let _ = self
                .term
                .write_line(&Self::page_line(index, page, self.verbose));
        }

        if self.verbose {
            let _ = self.term.write_line("");
            let _ = self.term.write_line(&format!(
                "Total: {} pages in {}",
                pages.len(),
                source.display()
            ));
        }

        Ok(())
    }

    fn format_error(&self, _operation: &str, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {error:#}", style("Error:").red().bold()));
        } else {
            let _ = self.term.write_line(&format!("Error: {error:#}"));
        }
    }
}
