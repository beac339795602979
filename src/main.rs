mod cli;
mod debug_report;

use anyhow::{Context, Result};
use bindery::{
    LibraryType, Options, ParsedFileInfo, SPECIAL_VOLUME, ScanConfig, ScanEntry, dispatch_all, dispatch_verbose,
};
use clap::Parser;
use cli::Cli;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise the verbose flag picks the level.
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| if cli.verbose { "bindery=trace".to_string() } else { "bindery=info".to_string() });
    tracing_subscriber::fmt().with_env_filter(&env_filter).with_writer(io::stderr).init();

    let config = ScanConfig::load_or_default(cli.config.as_deref());
    let library = cli.library.unwrap_or(config.library_type);
    let color = if cli.no_color {
        false
    } else {
        cli.color || io::stdout().is_terminal()
    };

    let entries = collect_entries(&cli, &config, library)?;
    if entries.is_empty() {
        anyhow::bail!("no input files");
    }

    if cli.explain {
        for entry in &entries {
            let details = dispatch_verbose(&entry.path, &entry.folder, &entry.root, entry.library_type);
            debug_report::print_run(&details, color);
        }
        return Ok(());
    }

    let options = Options { workers: cli.workers.or(config.workers) };
    let results = dispatch_all(&entries, &options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut skipped = 0usize;
    for (entry, result) in entries.iter().zip(&results) {
        match result {
            Some(info) if cli.json => writeln!(out, "{}", serde_json::to_string(info)?)?,
            Some(info) => writeln!(out, "{}", describe(info))?,
            None => {
                skipped += 1;
                tracing::debug!(path = %entry.path, "skipped");
            }
        }
    }

    tracing::info!(
        library = %library,
        dispatched = entries.len(),
        parsed = entries.len() - skipped,
        skipped,
        "scan finished"
    );
    Ok(())
}

fn collect_entries(cli: &Cli, config: &ScanConfig, library: LibraryType) -> Result<Vec<ScanEntry>> {
    let configured_root = cli.root.clone().or_else(|| config.library_root.clone());

    if let Some(dir) = &cli.scan {
        let root = configured_root.unwrap_or_else(|| dir.display().to_string());
        return Ok(walk(dir, &root, library, config.skip_hidden));
    }

    let paths: Vec<String> = if cli.paths.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .map(|line| line.map(|l| l.trim().to_string()))
            .filter(|line| line.as_ref().map_or(true, |l| !l.is_empty()))
            .collect::<io::Result<_>>()
            .context("failed to read paths from stdin")?
    } else {
        cli.paths.iter().map(|path| path.display().to_string()).collect()
    };

    // Without a root the containing folder is the only folder hint.
    let root = configured_root.unwrap_or_default();
    Ok(paths
        .into_iter()
        .map(|path| {
            let folder = cli.folder.clone().unwrap_or_else(|| parent_of(Path::new(&path)));
            ScanEntry::new(path, folder, root.clone(), library)
        })
        .collect())
}

fn walk(dir: &Path, root: &str, library: LibraryType, skip_hidden: bool) -> Vec<ScanEntry> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !(skip_hidden && is_hidden(entry)))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            ScanEntry::new(entry.path().display().to_string(), parent_of(entry.path()), root.to_string(), library)
        })
        .collect()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

fn parent_of(path: &Path) -> String {
    path.parent().map(|parent| parent.display().to_string()).unwrap_or_default()
}

fn describe(info: &ParsedFileInfo) -> String {
    let volume = if info.is_loose_leaf() {
        "loose".to_string()
    } else if info.volumes == SPECIAL_VOLUME {
        "special".to_string()
    } else {
        format!("v{}", info.volumes)
    };
    let chapter = if info.has_chapter() { format!("ch{}", info.chapters) } else { "-".to_string() };

    let mut line = format!("{}\t{}\t{}\t{}", info.series, volume, chapter, info.filename);
    if let Some(edition) = &info.edition {
        line.push_str(&format!("\tedition={edition}"));
    }
    if let Some(title) = &info.title {
        line.push_str(&format!("\ttitle={title}"));
    }
    line
}
