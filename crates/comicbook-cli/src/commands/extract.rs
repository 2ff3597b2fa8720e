//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::add_source_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use anyhow::anyhow;
use anyhow::bail;
use comicbook_core::AdapterOptions;
use comicbook_core::ComicBook;
use comicbook_core::ContainerFormat;
use comicbook_core::OutputExtension;
use std::path::Path;
use tracing::debug;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let source = args
        .from
        .as_deref()
        .or(args.path.as_deref())
        .ok_or_else(|| anyhow!("Source file required"))?;

    validate_source(source)?;
    if let Some(to) = &args.to
        && to.exists()
    {
        bail!("Destination already exists: {}", to.display());
    }

    let options = build_options(args);
    debug!(?options, "extract options");

    let book = add_source_context(ComicBook::open(source), source)?;
    let destination = add_source_context(book.extract(&options), source)?;

    formatter.format_extract_result(source, &destination)
}

fn validate_source(source: &Path) -> Result<()> {
    if !source.exists() {
        bail!("Source file not found: {}", source.display());
    }
    if source.is_dir() {
        bail!("Source must be a file: {}", source.display());
    }

    let extension = source
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    if ContainerFormat::from_extension(&extension).is_none() {
        bail!("Unsupported format: .{extension} (not yet implemented)");
    }
    Ok(())
}

fn build_options(args: &ExtractArgs) -> AdapterOptions {
    let extension = if args.bare {
        OutputExtension::Bare
    } else {
        args.extension
            .clone()
            .map_or(OutputExtension::Default, OutputExtension::Custom)
    };

    let mut options = AdapterOptions::new()
        .with_extension(extension)
        .with_include_all_entries(args.all)
        .with_delete_original(args.delete_original);
    if let Some(to) = &args.to {
        options = options.with_destination(to);
    }
    options
}
