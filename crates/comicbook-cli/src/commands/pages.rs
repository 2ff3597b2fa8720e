//! Pages command implementation

use crate::cli::PagesArgs;
use crate::error::add_source_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use comicbook_core::list_pages;

pub fn execute(args: &PagesArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let pages = add_source_context(list_pages(&args.path), &args.path)?;
    formatter.format_pages(&args.path, &pages)
}
