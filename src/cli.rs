use bindery::LibraryType;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bindery")]
#[command(author, version, about = "Read series, volume and chapter metadata from library file names")]
pub struct Cli {
    /// Files to parse. With no paths and no --scan, paths are read from stdin, one per line
    pub paths: Vec<PathBuf>,

    /// Walk a directory and parse every file under it
    #[arg(long, value_name = "DIR")]
    pub scan: Option<PathBuf>,

    /// Library type: manga, comic, comicvine, book, lightnovel or image
    #[arg(short, long, value_name = "TYPE")]
    pub library: Option<LibraryType>,

    /// Library root (default: config, then the --scan directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<String>,

    /// Containing folder for positional paths (default: each file's parent)
    #[arg(long, value_name = "DIR")]
    pub folder: Option<String>,

    /// Worker threads for parallel dispatch
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Path to a JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print one JSON object per parsed file
    #[arg(long, conflicts_with = "explain")]
    pub json: bool,

    /// Print a per-file report of triggers, tokens, strategy and timing
    #[arg(long)]
    pub explain: bool,

    /// Force ANSI color output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable ANSI color output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
