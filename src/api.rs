use crate::engine::{self, Strategy};
use crate::error::{Error, Result};
use crate::{LibraryType, ParsedFileInfo};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Options for batch dispatch.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Worker threads. `None` runs on rayon's global pool.
    pub workers: Option<usize>,
}

/// One file handed over by a directory scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanEntry {
    pub path: String,
    /// Directory containing the file.
    pub folder: String,
    /// Library root the file was found under.
    pub root: String,
    pub library_type: LibraryType,
}

impl ScanEntry {
    pub fn new(
        path: impl Into<String>,
        folder: impl Into<String>,
        root: impl Into<String>,
        library_type: LibraryType,
    ) -> Self {
        ScanEntry { path: path.into(), folder: folder.into(), root: root.into(), library_type }
    }
}

/// A token as reported by [`dispatch_verbose`].
///
/// `start`/`end` are byte offsets into [`DispatchDetails::text`].
#[derive(Debug, Clone, Serialize)]
pub struct TokenSummary {
    /// `"volume"`, `"chapter"`, `"edition"` or `"special"`.
    pub kind: &'static str,
    pub start: usize,
    pub end: usize,
    /// Slice of the text that matched.
    pub text: String,
    /// Canonical value (formatted range, edition label, marker).
    pub value: String,
    /// Pattern that produced the token.
    pub pattern: &'static str,
}

/// Result from [`dispatch_verbose`].
///
/// Meant for debugging rule tables, not for the scan hot path.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchDetails {
    /// Normalized input path.
    pub path: String,
    /// The text the extractors ran over (file stem, `_` read as space).
    pub text: String,
    /// Strategy that handled the file, if any applied.
    pub strategy: Option<Strategy>,
    /// Trigger buckets set for `text`.
    pub buckets: Vec<&'static str>,
    pub tokens: Vec<TokenSummary>,
    pub result: Option<ParsedFileInfo>,
    pub elapsed: Duration,
}

/// Parse one file with the first applicable strategy.
///
/// `None` means "skip this file": blacklisted, no applicable strategy, a
/// cover, or nothing recoverable. It is never an error.
///
/// # Example
/// ```
/// use bindery::{LibraryType, LOOSE_LEAF_VOLUME, dispatch};
///
/// let info = dispatch(
///     "E:/Manga/Beelzebub/Beelzebub_01_[Noodles].zip",
///     "E:/Manga/Beelzebub/",
///     "E:/Manga/",
///     LibraryType::Manga,
/// )
/// .unwrap();
/// assert_eq!(info.series, "Beelzebub");
/// assert_eq!(info.volumes, LOOSE_LEAF_VOLUME);
/// assert_eq!(info.chapters, "1");
///
/// assert!(dispatch("E:/Manga/Beelzebub/cover.png", "E:/Manga/Beelzebub/", "E:/Manga/", LibraryType::Manga).is_none());
/// ```
pub fn dispatch(path: &str, folder: &str, root: &str, library_type: LibraryType) -> Option<ParsedFileInfo> {
    engine::run(path, folder, root, library_type).result
}

/// Dispatch every entry in parallel. Results come back in input order.
///
/// Only building a dedicated worker pool can fail.
pub fn dispatch_all(entries: &[ScanEntry], options: &Options) -> Result<Vec<Option<ParsedFileInfo>>> {
    let run = || -> Vec<Option<ParsedFileInfo>> {
        entries.par_iter().map(|entry| dispatch(&entry.path, &entry.folder, &entry.root, entry.library_type)).collect()
    };

    match options.workers {
        None => Ok(run()),
        Some(workers) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
                .map_err(|err| Error::WorkerPool(err.to_string()))?;
            Ok(pool.install(run))
        }
    }
}

/// [`dispatch`] plus the intermediate state: strategy, buckets, tokens and
/// timing.
pub fn dispatch_verbose(path: &str, folder: &str, root: &str, library_type: LibraryType) -> DispatchDetails {
    let started = Instant::now();
    let run = engine::run(path, folder, root, library_type);
    let elapsed = started.elapsed();

    let tokens = run
        .tokens
        .iter()
        .map(|token| TokenSummary {
            kind: token.kind.name(),
            start: token.span.start,
            end: token.span.end,
            text: run.text.get(token.span.start..token.span.end).unwrap_or("").to_string(),
            value: token.value.clone(),
            pattern: token.pattern,
        })
        .collect();

    DispatchDetails {
        buckets: run.buckets.names(),
        path: run.path,
        text: run.text,
        strategy: run.strategy,
        tokens,
        result: run.result,
        elapsed,
    }
}
