//! Filename and folder metadata extraction for digital libraries.
//!
//! `bindery` turns human-authored archive, document and image names such as
//! `"Accel World - Volume 1 Chapter 2.cbz"` into a [`ParsedFileInfo`]
//! (series, volume range, chapter range, edition, special flag, title), and
//! orders parsed chapters for reader navigation.
//!
//! ```
//! use bindery::{LibraryType, dispatch};
//!
//! let info = dispatch(
//!     "E:/Manga/Mujaki no Rakuen/Mujaki no Rakuen Vol12 ch76.cbz",
//!     "E:/Manga/Mujaki no Rakuen/",
//!     "E:/Manga/",
//!     LibraryType::Manga,
//! )
//! .unwrap();
//!
//! assert_eq!(info.series, "Mujaki no Rakuen");
//! assert_eq!(info.volumes, "12");
//! assert_eq!(info.chapters, "76");
//! ```

#[macro_use]
mod macros;
mod api;
mod config;
mod engine;
mod error;
mod ordering;
mod path;
mod range;
mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use api::{
    DispatchDetails, Options, ScanEntry, TokenSummary, dispatch, dispatch_all, dispatch_verbose,
};
pub use config::ScanConfig;
pub use engine::Strategy;
pub use error::{Error, Result};
pub use ordering::{ChapterOrderingUnit, order, sort_chapters};
pub use path::normalize_path;
pub use range::{format_range, max_number_from_range, min_number_from_range};
pub use rules::clean_title;
pub use rules::predicates::{is_archive, is_cover_image, is_epub, is_image, is_pdf};

// --- Shared vocabulary --------------------------------------------------------

/// Chapter value used when a file carries no chapter number (whole-volume release).
pub const DEFAULT_CHAPTER: &str = "-100000";
/// Numeric form of [`DEFAULT_CHAPTER`].
pub const DEFAULT_CHAPTER_NUMBER: f32 = -100_000.0;
/// Volume value used when no volume could be determined (chapter-only release).
pub const LOOSE_LEAF_VOLUME: &str = "-100000";
/// Numeric form of [`LOOSE_LEAF_VOLUME`].
pub const LOOSE_LEAF_VOLUME_NUMBER: i32 = -100_000;
/// Volume value reserved for specials.
pub const SPECIAL_VOLUME: &str = "100000";
/// Numeric form of [`SPECIAL_VOLUME`].
pub const SPECIAL_VOLUME_NUMBER: i32 = 100_000;

/// The kind of library a file belongs to. Closed set: every strategy's
/// applicability check matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryType {
    #[default]
    Manga,
    Comic,
    ComicVine,
    Book,
    LightNovel,
    Image,
}

impl LibraryType {
    pub const ALL: [LibraryType; 6] = [
        LibraryType::Manga,
        LibraryType::Comic,
        LibraryType::ComicVine,
        LibraryType::Book,
        LibraryType::LightNovel,
        LibraryType::Image,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LibraryType::Manga => "manga",
            LibraryType::Comic => "comic",
            LibraryType::ComicVine => "comicvine",
            LibraryType::Book => "book",
            LibraryType::LightNovel => "lightnovel",
            LibraryType::Image => "image",
        }
    }

    pub(crate) fn is_comic(self) -> bool {
        matches!(self, LibraryType::Comic | LibraryType::ComicVine)
    }

    pub(crate) fn is_book(self) -> bool {
        matches!(self, LibraryType::Book | LibraryType::LightNovel)
    }
}

impl fmt::Display for LibraryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LibraryType {
    type Err = Error;

    /// Accepts the lowercase names plus `-`/`_`/space separated spellings
    /// such as `"comic-vine"` or `"Light Novel"`.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s.chars().filter(|c| !matches!(c, '-' | '_' | ' ')).collect::<String>().to_lowercase();
        LibraryType::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| Error::UnknownLibraryType(s.to_string()))
    }
}

/// Container type inferred from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MangaFormat {
    Archive,
    Epub,
    Pdf,
    Image,
}

impl MangaFormat {
    /// Infer the format from a path's extension. `None` for unsupported files.
    pub fn from_path(path: &str) -> Option<Self> {
        if is_archive(path) {
            Some(MangaFormat::Archive)
        } else if is_epub(path) {
            Some(MangaFormat::Epub)
        } else if is_pdf(path) {
            Some(MangaFormat::Pdf)
        } else if is_image(path) {
            Some(MangaFormat::Image)
        } else {
            None
        }
    }
}

/// Structured metadata recovered from one file.
///
/// `volumes` and `chapters` hold canonical range text (`"12"`, `"1-8"`,
/// `"6.5"`) or one of the sentinels ([`LOOSE_LEAF_VOLUME`],
/// [`SPECIAL_VOLUME`], [`DEFAULT_CHAPTER`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedFileInfo {
    pub series: String,
    pub volumes: String,
    pub chapters: String,
    pub edition: Option<String>,
    pub title: Option<String>,
    pub is_special: bool,
    pub format: MangaFormat,
    /// File name including extension.
    pub filename: String,
    /// Normalized full path of the file.
    pub full_path: String,
}

impl ParsedFileInfo {
    pub fn is_loose_leaf(&self) -> bool {
        self.volumes == LOOSE_LEAF_VOLUME
    }

    pub fn has_chapter(&self) -> bool {
        self.chapters != DEFAULT_CHAPTER
    }

    /// Lower bound of the volume range, sentinels included.
    pub fn volume_min_number(&self) -> f32 {
        min_number_from_range(&self.volumes)
    }

    /// Lower bound of the chapter range, sentinels included.
    pub fn chapter_min_number(&self) -> f32 {
        min_number_from_range(&self.chapters)
    }
}

// --- Internal types ---------------------------------------------------------

/// Byte range into the text an extractor ran over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TokenKind {
    Volume,
    Chapter,
    Edition,
    Special,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Volume => "volume",
            TokenKind::Chapter => "chapter",
            TokenKind::Edition => "edition",
            TokenKind::Special => "special",
        }
    }
}

/// A token recovered by one of the extractors.
#[derive(Debug, Clone)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// Span of the token in the extractor text: keyword and value, without
    /// surrounding separators.
    pub span: Span,
    /// Canonical value: a formatted range, an edition label or the marker text.
    pub value: String,
    /// Source pattern, kept for debug reports.
    pub pattern: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_type_parses_loose_spellings() {
        assert_eq!("manga".parse::<LibraryType>().unwrap(), LibraryType::Manga);
        assert_eq!("Comic-Vine".parse::<LibraryType>().unwrap(), LibraryType::ComicVine);
        assert_eq!("light novel".parse::<LibraryType>().unwrap(), LibraryType::LightNovel);
        assert!(matches!("webtoon".parse::<LibraryType>(), Err(Error::UnknownLibraryType(_))));
    }

    #[test]
    fn library_type_round_trips_through_serde() {
        let json = serde_json::to_string(&LibraryType::LightNovel).unwrap();
        assert_eq!(json, "\"lightnovel\"");
        let back: LibraryType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LibraryType::LightNovel);
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(MangaFormat::from_path("a/b.CBZ"), Some(MangaFormat::Archive));
        assert_eq!(MangaFormat::from_path("a/b.tar.gz"), Some(MangaFormat::Archive));
        assert_eq!(MangaFormat::from_path("a/b.epub"), Some(MangaFormat::Epub));
        assert_eq!(MangaFormat::from_path("a/b.pdf"), Some(MangaFormat::Pdf));
        assert_eq!(MangaFormat::from_path("a/b.webp"), Some(MangaFormat::Image));
        assert_eq!(MangaFormat::from_path("a/b.txt"), None);
    }

    #[test]
    fn sentinels_are_out_of_band() {
        assert_eq!(min_number_from_range(LOOSE_LEAF_VOLUME), LOOSE_LEAF_VOLUME_NUMBER as f32);
        assert_eq!(min_number_from_range(SPECIAL_VOLUME), SPECIAL_VOLUME_NUMBER as f32);
        assert_eq!(min_number_from_range(DEFAULT_CHAPTER), DEFAULT_CHAPTER_NUMBER);
        assert_ne!(LOOSE_LEAF_VOLUME_NUMBER, SPECIAL_VOLUME_NUMBER);
    }

    #[test]
    fn spans_overlap_and_contain() {
        let outer = Span::new(2, 10);
        assert!(outer.contains(&Span::new(3, 5)));
        assert!(outer.overlaps(&Span::new(9, 12)));
        assert!(!outer.overlaps(&Span::new(10, 12)));
    }
}
