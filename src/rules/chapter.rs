//! Chapter extraction.
//!
//! Two passes: explicit markers first (leftmost wins), then bare numbers for
//! the library types that name chapters that way (`Beelzebub_01.zip`,
//! `Batman 012 (2016).cbz`).

use super::leftmost;
use crate::range::format_range;
use crate::{LibraryType, Span, Token, TokenKind};
use regex::Regex;

fn manga_table() -> &'static [Regex] {
    regex_table!(
        r"(?i)\b(?:chapters?|chp|ch|c)\.?\s?(?P<chapter>[0-9]+(?:\.[0-9]+)?(?:-c?[0-9]+(?:\.[0-9]+)?)?)",
        r"(?:^|\s)#(?P<chapter>[0-9]+(?:\.[0-9]+)?(?:-[0-9]+(?:\.[0-9]+)?)?)",
        r"(?i)\b(?:episode|ep\.?|issue)\s?(?P<chapter>[0-9]+(?:\.[0-9]+)?(?:-[0-9]+(?:\.[0-9]+)?)?)",
        r"第(?P<chapter>[0-9]+(?:\.[0-9]+)?(?:-[0-9]+)?)[话話]",
        r"제?(?P<chapter>[0-9]+(?:\.[0-9]+)?)[화회장]",
        r"(?i)\bглав[аы]\.?\s?(?P<chapter>[0-9]+(?:\.[0-9]+)?(?:-[0-9]+(?:\.[0-9]+)?)?)",
    )
}

fn comic_table() -> &'static [Regex] {
    regex_table!(
        r"(?i)\b(?:chapters?|chp|ch|c)\.?\s?(?P<chapter>[0-9]+(?:\.[0-9]+)?(?:-c?[0-9]+(?:\.[0-9]+)?)?)",
        r"(?:^|\s)#(?P<chapter>[0-9]+(?:\.[0-9]+)?(?:-[0-9]+(?:\.[0-9]+)?)?)",
        r"(?i)\b(?:episode|ep\.?|issue)\s?(?P<chapter>[0-9]+(?:\.[0-9]+)?(?:-[0-9]+(?:\.[0-9]+)?)?)",
    )
}

fn book_table() -> &'static [Regex] {
    regex_table!(r"(?i)\b(?:chapters?|chp|ch|c)\.?\s?(?P<chapter>[0-9]+(?:\.[0-9]+)?(?:-c?[0-9]+(?:\.[0-9]+)?)?)")
}

fn table(library: LibraryType) -> &'static [Regex] {
    match library {
        LibraryType::Manga | LibraryType::Image => manga_table(),
        LibraryType::Comic | LibraryType::ComicVine => comic_table(),
        LibraryType::Book | LibraryType::LightNovel => book_table(),
    }
}

/// Leftmost explicit chapter marker.
pub(crate) fn explicit(text: &str, library: LibraryType, accept: &dyn Fn(Span) -> bool) -> Option<Token> {
    leftmost(text, table(library), TokenKind::Chapter, "chapter", accept)
}

/// Last accepted bare number. Year-like numbers (1900-2099) are only taken
/// when nothing else is available.
pub(crate) fn bare(text: &str, library: LibraryType, accept: &dyn Fn(Span) -> bool) -> Option<Token> {
    if library.is_book() {
        return None;
    }

    let re = regex!(
        r"(?i)(?:^|[\s\-])(?P<chapter>[0-9]+(?:\.[0-9]+)?(?:-[0-9]+(?:\.[0-9]+)?)?)[a-z]?(?:$|[\s\-\[(\]),])"
    );

    // The trailing separator is part of the match, so restart right after the
    // number to let adjacent candidates (`01 02`) share it.
    let mut candidates = Vec::new();
    let mut at = 0;
    while let Some(caps) = re.captures_at(text, at) {
        let Some(number) = caps.name("chapter") else { break };
        at = number.end();
        let span = Span::new(number.start(), number.end());
        if accept(span) {
            candidates.push(Token {
                kind: TokenKind::Chapter,
                span,
                value: format_range(number.as_str()),
                pattern: re.as_str(),
            });
        }
    }

    candidates.iter().rev().find(|token| !is_year(&token.value)).or(candidates.last()).cloned()
}

fn is_year(value: &str) -> bool {
    value.len() == 4 && value.parse::<u32>().is_ok_and(|n| (1900..=2099).contains(&n))
}
