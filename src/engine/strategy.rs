//! The closed set of parser strategies and the per-file context they share.

use super::fallback::FolderChain;
use super::trigger::Buckets;
use super::{basic, image};
use crate::path::{file_name, file_stem, normalize_path};
use crate::rules::predicates::{is_archive, is_epub, is_image, is_pdf};
use crate::rules::{Analysis, clean_title, prefix_before};
use crate::{LibraryType, MangaFormat, ParsedFileInfo};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parser strategy. Strategies are mutually exclusive for any
/// (extension, library type) pair, so at most one ever applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Archives and documents (cbz, cbr, zip, rar, 7z, epub, pdf ...).
    Basic,
    /// Loose raster images.
    Image,
}

impl Strategy {
    /// Selection order.
    pub const ALL: [Strategy; 2] = [Strategy::Basic, Strategy::Image];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Basic => "basic",
            Strategy::Image => "image",
        }
    }

    /// Whether this strategy handles `file` (a file name or path) in a
    /// library of type `library`.
    pub fn is_applicable(self, file: &str, library: LibraryType) -> bool {
        match self {
            Strategy::Basic => match library {
                LibraryType::Manga
                | LibraryType::Comic
                | LibraryType::ComicVine
                | LibraryType::Book
                | LibraryType::LightNovel => is_archive(file) || is_epub(file) || is_pdf(file),
                LibraryType::Image => false,
            },
            Strategy::Image => match library {
                LibraryType::Manga | LibraryType::Comic | LibraryType::Image => is_image(file),
                LibraryType::ComicVine | LibraryType::Book | LibraryType::LightNovel => false,
            },
        }
    }

    /// First applicable strategy for `file`.
    pub fn select(file: &str, library: LibraryType) -> Option<Strategy> {
        Strategy::ALL.into_iter().find(|strategy| strategy.is_applicable(file, library))
    }

    /// Parse one file. `folder` is the directory containing it and `root` the
    /// library root; both may use either separator style.
    pub fn parse(self, path: &str, folder: &str, root: &str, library: LibraryType) -> Option<ParsedFileInfo> {
        self.parse_context(&FileContext::new(path, folder, root, library))
    }

    pub(crate) fn parse_context(self, ctx: &FileContext) -> Option<ParsedFileInfo> {
        match self {
            Strategy::Basic => basic::parse(ctx),
            Strategy::Image => image::parse(ctx),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a strategy needs to know about one file, computed once.
#[derive(Debug, Clone)]
pub(crate) struct FileContext {
    pub full_path: String,
    pub folder: String,
    pub root: String,
    pub library: LibraryType,
    pub filename: String,
    pub stem: String,
    /// The stem with `_` read as a space; every span indexes into this.
    pub text: String,
    pub buckets: Buckets,
    pub analysis: Analysis,
}

impl FileContext {
    pub fn new(path: &str, folder: &str, root: &str, library: LibraryType) -> Self {
        let full_path = normalize_path(path);
        let filename = file_name(&full_path).to_string();
        let stem = file_stem(&filename).to_string();
        let text = stem.replace('_', " ");
        let buckets = Buckets::scan(&text);
        let analysis = Analysis::run_with(&text, library, buckets);

        FileContext {
            full_path,
            folder: normalize_path(folder),
            root: normalize_path(root),
            library,
            filename,
            stem,
            text,
            buckets,
            analysis,
        }
    }

    pub fn chain(&self) -> FolderChain {
        FolderChain::new(&self.full_path, &self.folder, &self.root, self.library)
    }

    /// Cleaned text before `end`.
    pub fn prefix(&self, end: usize) -> Option<String> {
        prefix_before(&self.text, end)
    }

    /// The whole stem, cleaned.
    pub fn stem_title(&self) -> Option<String> {
        let cleaned = clean_title(&self.text);
        (!cleaned.is_empty()).then_some(cleaned)
    }

    /// The cleaned stem as a last-resort series. `None` when the stem holds
    /// nothing but tokens (`Vol 1`, `SP01`).
    pub fn stem_series(&self) -> Option<String> {
        let tokens = self.analysis.tokens();
        let rest: String = self
            .text
            .char_indices()
            .map(|(at, c)| if tokens.iter().any(|t| t.span.start <= at && at < t.span.end) { ' ' } else { c })
            .collect();
        if clean_title(&rest).is_empty() {
            return None;
        }
        self.stem_title()
    }

    /// Title of a special: the text after its `SP<n>` marker (or first
    /// keyword marker), else the cleaned stem.
    pub fn special_title(&self) -> Option<String> {
        self.analysis
            .title_marker()
            .and_then(|marker| self.text.get(marker.span.end..))
            .map(clean_title)
            .filter(|title| !title.is_empty())
            .or_else(|| self.stem_title())
    }

    /// Final record. `None` when the series is empty or the extension has no
    /// known format.
    pub fn finish(
        &self,
        series: String,
        volumes: String,
        chapters: String,
        title: Option<String>,
        is_special: bool,
    ) -> Option<ParsedFileInfo> {
        if series.trim().is_empty() {
            tracing::trace!(path = %self.full_path, "no series recoverable");
            return None;
        }
        let format = MangaFormat::from_path(&self.filename)?;

        Some(ParsedFileInfo {
            series,
            volumes,
            chapters,
            edition: self.analysis.edition.as_ref().map(|token| token.value.clone()),
            title,
            is_special,
            format,
            filename: self.filename.clone(),
            full_path: self.full_path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategies_are_mutually_exclusive() {
        let files = ["a.cbz", "a.cbr", "a.zip", "a.rar", "a.7z", "a.epub", "a.pdf", "a.png", "a.jpg", "a.txt"];
        for library in LibraryType::ALL {
            for file in files {
                let applicable = Strategy::ALL.iter().filter(|s| s.is_applicable(file, library)).count();
                assert!(applicable <= 1, "{file} in {library} matched {applicable} strategies");
            }
        }
    }

    #[test]
    fn applicability_table() {
        assert!(Strategy::Basic.is_applicable("Vol 1.cbz", LibraryType::Manga));
        assert!(Strategy::Basic.is_applicable("Vol 1.epub", LibraryType::LightNovel));
        assert!(Strategy::Basic.is_applicable("Issue 1.cbr", LibraryType::ComicVine));
        assert!(!Strategy::Basic.is_applicable("Vol 1.cbz", LibraryType::Image));
        assert!(!Strategy::Basic.is_applicable("page.png", LibraryType::ComicVine));

        assert!(Strategy::Image.is_applicable("page.png", LibraryType::Manga));
        assert!(Strategy::Image.is_applicable("page.png", LibraryType::Image));
        assert!(!Strategy::Image.is_applicable("page.png", LibraryType::ComicVine));
        assert!(!Strategy::Image.is_applicable("page.png", LibraryType::Book));
        assert!(!Strategy::Image.is_applicable("Vol 1.cbz", LibraryType::Image));
    }

    #[test]
    fn selection() {
        assert_eq!(Strategy::select("x.cbz", LibraryType::Comic), Some(Strategy::Basic));
        assert_eq!(Strategy::select("x.webp", LibraryType::Comic), Some(Strategy::Image));
        assert_eq!(Strategy::select("x.txt", LibraryType::Manga), None);
    }

    #[test]
    fn context_reads_underscores_as_spaces() {
        let ctx = FileContext::new(
            r"E:\Manga\Beelzebub\Beelzebub_01_[Noodles].zip",
            r"E:\Manga\Beelzebub",
            r"E:\Manga",
            LibraryType::Manga,
        );
        assert_eq!(ctx.full_path, "E:/Manga/Beelzebub/Beelzebub_01_[Noodles].zip");
        assert_eq!(ctx.filename, "Beelzebub_01_[Noodles].zip");
        assert_eq!(ctx.stem, "Beelzebub_01_[Noodles]");
        assert_eq!(ctx.text, "Beelzebub 01 [Noodles]");
        assert!(ctx.buckets.contains(Buckets::HAS_DIGITS));
    }

    #[test]
    fn stem_series_needs_text_outside_tokens() {
        let stem_series = |path: &str| FileContext::new(path, "E:/Manga/", "E:/Manga/", LibraryType::Manga).stem_series();
        assert_eq!(stem_series("E:/Manga/Vol 1.cbz"), None);
        assert_eq!(stem_series("E:/Manga/SP01 [Group].cbz"), None);
        assert_eq!(stem_series("E:/Manga/v01 - ch 3.cbz"), None);
        assert_eq!(stem_series("E:/Manga/Artbook Vol 1.cbz").as_deref(), Some("Artbook Vol 1"));
        assert_eq!(stem_series("E:/Manga/Some Artbook.cbz").as_deref(), Some("Some Artbook"));
    }
}
