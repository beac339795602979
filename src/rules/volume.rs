//! Volume extraction.

use super::leftmost;
use crate::range::min_number_from_range;
use crate::{LOOSE_LEAF_VOLUME_NUMBER, LibraryType, SPECIAL_VOLUME_NUMBER, Span, Token, TokenKind};
use regex::Regex;

fn manga_table() -> &'static [Regex] {
    regex_table!(
        r"(?i)\b(?:volumes?|vol)\.?\s?(?P<volume>[0-9]+(?:\.[0-9]+)?(?:-[0-9]+(?:\.[0-9]+)?)?)",
        r"(?i)\bv(?P<volume>[0-9]+(?:\.[0-9]+)?(?:-[0-9]+(?:\.[0-9]+)?)?)\b",
        r"(?i)\bs(?P<volume>[0-9]+)\b",
        r"第(?P<volume>[0-9]+)[卷册]",
        r"(?P<volume>[0-9]+(?:-[0-9]+)?)巻",
        r"제?(?P<volume>[0-9]+(?:\.[0-9])?)권",
        r"(?i)\bтом(?:а)?\.?\s?(?P<volume>[0-9]+(?:\.[0-9]+)?(?:-[0-9]+(?:\.[0-9]+)?)?)",
    )
}

fn comic_table() -> &'static [Regex] {
    regex_table!(
        r"(?i)\b(?:volumes?|vol)\.?\s?(?P<volume>[0-9]+(?:\.[0-9]+)?(?:-[0-9]+(?:\.[0-9]+)?)?)",
        r"(?i)\bv(?P<volume>[0-9]+(?:\.[0-9]+)?(?:-[0-9]+(?:\.[0-9]+)?)?)\b",
    )
}

fn book_table() -> &'static [Regex] {
    regex_table!(
        r"(?i)\b(?:volumes?|vol)\.?\s?(?P<volume>[0-9]+(?:\.[0-9]+)?(?:-[0-9]+(?:\.[0-9]+)?)?)",
        r"(?i)\bv(?P<volume>[0-9]+(?:\.[0-9]+)?(?:-[0-9]+(?:\.[0-9]+)?)?)\b",
        r"(?i)\bbook\s?(?P<volume>[0-9]+)\b",
    )
}

fn table(library: LibraryType) -> &'static [Regex] {
    match library {
        LibraryType::Manga | LibraryType::Image => manga_table(),
        LibraryType::Comic | LibraryType::ComicVine => comic_table(),
        LibraryType::Book | LibraryType::LightNovel => book_table(),
    }
}

/// First volume token in `text`.
pub(crate) fn extract(text: &str, library: LibraryType, accept: &dyn Fn(Span) -> bool) -> Option<Token> {
    leftmost(text, table(library), TokenKind::Volume, "volume", accept)
}

/// Bare number at the end of a folder name (`Series/Part 2/`).
pub(crate) fn trailing_number(text: &str) -> Option<String> {
    let caps = regex!(r"(?:^|\s)(?P<volume>[0-9]+(?:\.[0-9]+)?)\s*$").captures(text)?;
    Some(crate::range::format_range(caps.name("volume")?.as_str())).filter(|value| !is_reserved(value))
}

/// A volume whose number reads back as one of the volume sentinels.
pub(crate) fn is_reserved(value: &str) -> bool {
    let number = min_number_from_range(value);
    number == SPECIAL_VOLUME_NUMBER as f32 || number == LOOSE_LEAF_VOLUME_NUMBER as f32
}
