//! Special-marker extraction (`SP01`, `Special`, `Omake`, `(SP)` ...).

use crate::{LibraryType, Span, Token, TokenKind};
use regex::Regex;

fn base_table() -> &'static [Regex] {
    regex_table!(
        r"(?i)(?:^|[^\p{L}0-9])(?P<marker>sp[0-9]+)\b",
        r"(?i)\b(?P<marker>specials?|omake|one[ -]?shot|side stor(?:y|ies)|bonus|extra chapter|art collection)\b",
        r"(?i)[\[(](?P<marker>sp)[\])]",
    )
}

fn comic_table() -> &'static [Regex] {
    regex_table!(
        r"(?i)(?:^|[^\p{L}0-9])(?P<marker>sp[0-9]+)\b",
        r"(?i)\b(?P<marker>specials?|omake|one[ -]?shot|side stor(?:y|ies)|bonus|extra chapter|art collection)\b",
        r"(?i)[\[(](?P<marker>sp)[\])]",
        r"(?i)\b(?P<marker>annual)\b",
    )
}

/// All special markers in `text`, ordered by position. Overlapping markers
/// keep the earliest.
pub(crate) fn extract(text: &str, library: LibraryType) -> Vec<Token> {
    let table = if library.is_comic() { comic_table() } else { base_table() };

    let mut markers: Vec<Token> = table
        .iter()
        .flat_map(|re| {
            re.captures_iter(text).filter_map(move |caps| {
                let marker = caps.name("marker")?;
                if names_an_edition(&text[marker.end()..]) {
                    return None;
                }
                Some(Token {
                    kind: TokenKind::Special,
                    span: Span::new(marker.start(), marker.end()),
                    value: marker.as_str().to_string(),
                    pattern: re.as_str(),
                })
            })
        })
        .collect();

    markers.sort_by_key(|token| (token.span.start, token.span.end));
    markers.dedup_by(|later, kept| kept.span.overlaps(&later.span));
    markers
}

/// `Special Edition` is an edition tag, not a marker.
fn names_an_edition(rest: &str) -> bool {
    regex!(r"(?i)^[ _]edition\b").is_match(rest)
}

/// `SP<n>` style marker, as opposed to a keyword.
pub(crate) fn is_numbered(token: &Token) -> bool {
    regex!(r"(?i)^sp[0-9]+$").is_match(&token.value)
}

/// Folder names that only group specials (`Series/Specials/`).
pub(crate) fn is_special_folder(name: &str) -> bool {
    regex!(r"(?i)^\s*(?:specials?|extras?|omakes?|bonus)\s*$").is_match(name)
}
