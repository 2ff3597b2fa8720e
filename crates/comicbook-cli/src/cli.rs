//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use clap_complete::Shell;
use comicbook_core::ContainerFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "comicbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a comic book archive into a folder
    Extract(ExtractArgs),
    /// Pack a folder of pages into a comic book archive
    Archive(ArchiveArgs),
    /// List the pages of a comic book in reading order
    Pages(PagesArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Archive to extract (.cbz, .cb7, .cbt)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Archive to extract; takes precedence over PATH
    #[arg(long, value_name = "PATH")]
    pub from: Option<PathBuf>,

    /// Output folder (default: next to the archive)
    #[arg(long, value_name = "PATH")]
    pub to: Option<PathBuf>,

    /// Extension of the output folder (default: cb)
    #[arg(short, long, value_name = "EXT", conflicts_with = "bare")]
    pub extension: Option<String>,

    /// Name the output folder after the archive, without an extension
    #[arg(long)]
    pub bare: bool,

    /// Extract every file, not only images
    #[arg(short, long)]
    pub all: bool,

    /// Delete the archive after a successful extraction
    #[arg(short, long)]
    pub delete_original: bool,
}

#[derive(clap::Args)]
pub struct ArchiveArgs {
    /// Folder of pages to archive
    #[arg(value_name = "FOLDER")]
    pub folder: Option<PathBuf>,

    /// Folder to archive; takes precedence over FOLDER
    #[arg(long, value_name = "FOLDER")]
    pub from: Option<PathBuf>,

    /// Output archive path (default: next to the folder)
    #[arg(long, value_name = "PATH")]
    pub to: Option<PathBuf>,

    /// Archive format
    #[arg(short, long, value_enum, default_value_t = ArchiveFormat::Cbz)]
    pub format: ArchiveFormat,

    /// Extension of the output archive (default: the format's own)
    #[arg(short, long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Compression level for cbz output (1-9)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub compression_level: Option<u8>,

    /// Delete the folder after the archive was written
    #[arg(short, long)]
    pub delete_original: bool,
}

#[derive(clap::Args)]
pub struct PagesArgs {
    /// Comic book folder or archive
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Archive formats that can be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArchiveFormat {
    /// Zip
    Cbz,
    /// 7-Zip
    Cb7,
    /// Tar
    Cbt,
}

impl From<ArchiveFormat> for ContainerFormat {
    fn from(format: ArchiveFormat) -> Self {
        match format {
            ArchiveFormat::Cbz => Self::Zip,
            ArchiveFormat::Cb7 => Self::SevenZip,
            ArchiveFormat::Cbt => Self::Tar,
        }
    }
}
