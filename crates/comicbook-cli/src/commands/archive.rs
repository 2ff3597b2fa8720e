//! Archive command implementation.

use crate::cli::ArchiveArgs;
use crate::error::add_source_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use anyhow::anyhow;
use anyhow::bail;
use comicbook_core::AdapterOptions;
use comicbook_core::ComicBook;
use comicbook_core::ContainerFormat;
use comicbook_core::OutputExtension;
use tracing::debug;

pub fn execute(args: &ArchiveArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let source = args
        .from
        .as_deref()
        .or(args.folder.as_deref())
        .ok_or_else(|| anyhow!("Source folder required"))?;

    if !source.exists() {
        bail!("Source folder not found: {}", source.display());
    }
    if !source.is_dir() {
        bail!("Source must be a directory: {}", source.display());
    }
    if let Some(to) = &args.to
        && to.exists()
    {
        bail!("Destination already exists: {}", to.display());
    }

    let format = ContainerFormat::from(args.format);
    let options = build_options(args);
    debug!(%format, ?options, "archive options");

    let book = add_source_context(ComicBook::open(source), source)?;
    let output = add_source_context(book.archive_as(format, &options), source)?;

    formatter.format_archive_result(source, &output)
}

fn build_options(args: &ArchiveArgs) -> AdapterOptions {
    let extension = args
        .extension
        .clone()
        .map_or(OutputExtension::Default, OutputExtension::Custom);

    let mut options = AdapterOptions::new()
        .with_extension(extension)
        .with_delete_original(args.delete_original);
    if let Some(to) = &args.to {
        options = options.with_destination(to);
    }
    if let Some(level) = args.compression_level {
        options = options.with_compression_level(level);
    }
    options
}
