//! Token extractors.
//!
//! Each extractor owns a small, ordered table of regexes (compiled once) and
//! is a pure function over the text it is given. [`Analysis`] runs all of them
//! over one piece of text and applies the cross-extractor rules:
//!
//! - matches that sit inside a bracket group (`[..]`, `(..)`, `{..}`) are
//!   never volumes or chapters;
//! - a chapter never overlaps the volume or edition token;
//! - explicit chapter markers (`ch`, `#`, `Episode`, `第n話` ...) beat bare
//!   numbers, and bare numbers are only considered where the library type
//!   allows them.
//!
//! Strategies read the result; they do not call the extractors directly.

pub(crate) mod chapter;
pub(crate) mod edition;
pub(crate) mod predicates;
pub(crate) mod special;
mod title;
pub(crate) mod volume;

#[cfg(test)]
mod tests;

pub use title::clean_title;

use crate::engine::Buckets;
use crate::{LibraryType, Span, Token, TokenKind};
use regex::Regex;

/// Everything the extractors recovered from one piece of text.
#[derive(Debug, Clone, Default)]
pub(crate) struct Analysis {
    pub brackets: Vec<Span>,
    pub volume: Option<Token>,
    pub chapter: Option<Token>,
    /// Whether `chapter` came from an explicit marker rather than a bare number.
    pub chapter_explicit: bool,
    pub edition: Option<Token>,
    /// Special markers, ordered by position, non-overlapping.
    pub specials: Vec<Token>,
    /// A volume token whose number collides with a sentinel. It is not a
    /// volume, but it still ends the series and hides its digits from the
    /// chapter extractors.
    pub reserved: Option<Token>,
}

impl Analysis {
    pub fn run(text: &str, library: LibraryType) -> Self {
        Self::run_with(text, library, Buckets::scan(text))
    }

    pub fn run_with(text: &str, library: LibraryType, buckets: Buckets) -> Self {
        let brackets = if buckets.contains(Buckets::HAS_BRACKETS) { bracket_spans(text) } else { Vec::new() };
        let outside = |span: Span| !brackets.iter().any(|group| group.contains(&span));

        let edition = if buckets.contains(Buckets::EDITIONISH) { edition::extract(text) } else { None };
        let specials =
            if buckets.contains(Buckets::SPECIALISH) { special::extract(text, library) } else { Vec::new() };

        let mut analysis = Analysis { edition, specials, ..Default::default() };

        if buckets.contains(Buckets::HAS_DIGITS) {
            let volume = volume::extract(text, library, &outside);
            let volume_span = volume.as_ref().map(|token| token.span);

            let claimed: Vec<Span> = volume_span.into_iter().chain(analysis.edition.iter().map(|t| t.span)).collect();
            let free = |span: Span| outside(span) && !claimed.iter().any(|c| c.overlaps(&span));
            // A bare number ahead of the volume belongs to the series (`Mob Psycho 100 v01`).
            let after_volume = |span: Span| free(span) && volume_span.is_none_or(|v| span.start >= v.end);

            analysis.chapter = chapter::explicit(text, library, &free);
            analysis.chapter_explicit = analysis.chapter.is_some();
            if analysis.chapter.is_none() {
                analysis.chapter = chapter::bare(text, library, &after_volume);
            }

            match volume {
                Some(token) if volume::is_reserved(&token.value) => analysis.reserved = Some(token),
                volume => analysis.volume = volume,
            }
        }
        analysis.brackets = brackets;

        for token in analysis.tokens() {
            tracing::trace!(
                kind = token.kind.name(),
                value = %token.value,
                start = token.span.start,
                end = token.span.end,
                pattern = token.pattern,
                "token"
            );
        }

        analysis
    }

    pub fn is_special(&self) -> bool {
        !self.specials.is_empty()
    }

    pub fn first_marker(&self) -> Option<&Token> {
        self.specials.first()
    }

    /// First `SP<n>` marker, falling back to the first marker of any kind.
    pub fn title_marker(&self) -> Option<&Token> {
        self.specials.iter().find(|token| special::is_numbered(token)).or_else(|| self.first_marker())
    }

    /// Start of the earliest volume, chapter or edition token.
    pub fn anchor(&self) -> Option<usize> {
        [&self.volume, &self.reserved, &self.chapter, &self.edition]
            .into_iter()
            .flatten()
            .map(|token| token.span.start)
            .min()
    }

    /// Like [`Analysis::anchor`] but ignoring bare-number chapters.
    pub fn explicit_anchor(&self) -> Option<usize> {
        let chapter = if self.chapter_explicit { self.chapter.as_ref() } else { None };
        [self.volume.as_ref(), self.reserved.as_ref(), chapter, self.edition.as_ref()]
            .into_iter()
            .flatten()
            .map(|token| token.span.start)
            .min()
    }

    pub fn explicit_chapter(&self) -> Option<&Token> {
        if self.chapter_explicit { self.chapter.as_ref() } else { None }
    }

    /// All tokens, ordered by position.
    pub fn tokens(&self) -> Vec<Token> {
        let mut tokens: Vec<Token> = [&self.volume, &self.reserved, &self.chapter, &self.edition]
            .into_iter()
            .flatten()
            .chain(self.specials.iter())
            .cloned()
            .collect();
        tokens.sort_by_key(|token| (token.span.start, token.span.end));
        tokens
    }
}

/// Spans of `[..]`, `(..)` and `{..}` groups. Groups do not nest.
pub(crate) fn bracket_spans(text: &str) -> Vec<Span> {
    regex!(r"\[[^\]]*\]|\([^)]*\)|\{[^}]*\}").find_iter(text).map(|m| Span::new(m.start(), m.end())).collect()
}

/// Cleaned text before `end`, or `None` when nothing usable remains.
pub(crate) fn prefix_before(text: &str, end: usize) -> Option<String> {
    let cleaned = clean_title(text.get(..end)?);
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Span of a whole match with surrounding separators trimmed off.
fn trimmed_span(m: regex::Match<'_>) -> Span {
    let is_sep = |c: char| c.is_whitespace() || matches!(c, '-' | ',' | '(' | ')' | '[' | ']');
    let s = m.as_str();
    let lead = s.len() - s.trim_start_matches(is_sep).len();
    let trail = s.len() - s.trim_end_matches(is_sep).len();
    if lead + trail >= s.len() {
        return Span::new(m.start(), m.end());
    }
    Span::new(m.start() + lead, m.end() - trail)
}

/// Leftmost accepted match of `group` across `table`. Table order breaks ties
/// between patterns matching at the same position.
fn leftmost(
    text: &str,
    table: &'static [Regex],
    kind: TokenKind,
    group: &str,
    accept: &dyn Fn(Span) -> bool,
) -> Option<Token> {
    let mut best: Option<Token> = None;
    for re in table {
        let found = re.captures_iter(text).find_map(|caps| {
            let value = caps.name(group)?;
            let span = trimmed_span(caps.get(0)?);
            accept(span).then(|| Token {
                kind,
                span,
                value: crate::range::format_range(value.as_str()),
                pattern: re.as_str(),
            })
        });
        if let Some(token) = found {
            if best.as_ref().is_none_or(|current| token.span.start < current.span.start) {
                best = Some(token);
            }
        }
    }
    best
}
