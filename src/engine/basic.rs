//! Archives and documents.
//!
//! Filename tokens win; the folder chain fills in what the name lacks; the
//! sentinels cover what nobody knows. A special marker overrides the volume
//! and suppresses every chapter except an explicit one written before the
//! marker.

use super::fallback::FolderChain;
use super::strategy::FileContext;
use crate::{DEFAULT_CHAPTER, LOOSE_LEAF_VOLUME, ParsedFileInfo, SPECIAL_VOLUME, Token};

pub(crate) fn parse(ctx: &FileContext) -> Option<ParsedFileInfo> {
    if regex!(r"(?i)^\s*(?:cover|folder)\s*$").is_match(&ctx.text) {
        tracing::trace!(path = %ctx.full_path, "cover-like archive skipped");
        return None;
    }
    assemble(ctx, &ctx.chain())
}

/// Combine filename tokens with the folder chain. Also used for image pages
/// in Manga and Comic libraries.
pub(super) fn assemble(ctx: &FileContext, chain: &FolderChain) -> Option<ParsedFileInfo> {
    let analysis = &ctx.analysis;

    if let Some(marker) = analysis.first_marker() {
        let chapters = analysis
            .explicit_chapter()
            .filter(|chapter| leads_into(&ctx.text, chapter, marker))
            .map_or_else(|| DEFAULT_CHAPTER.to_string(), |chapter| chapter.value.clone());

        let end = analysis.anchor().map_or(marker.span.start, |anchor| anchor.min(marker.span.start));
        let series = chain.series().or_else(|| ctx.prefix(end)).or_else(|| ctx.stem_series())?;

        tracing::trace!(marker = %marker.value, %chapters, "special");
        return ctx.finish(series, SPECIAL_VOLUME.to_string(), chapters, ctx.special_title(), true);
    }

    let volume = analysis.volume.as_ref().map(|token| token.value.clone()).or_else(|| chain.volume());
    let chapter = analysis.chapter.as_ref().map(|token| token.value.clone()).or_else(|| chain.chapter());
    let series = analysis
        .anchor()
        .and_then(|anchor| ctx.prefix(anchor))
        .or_else(|| chain.series())
        .or_else(|| ctx.stem_series())?;

    match (volume, chapter) {
        (None, None) => {
            tracing::trace!(path = %ctx.full_path, "no volume or chapter, treated as special");
            ctx.finish(series, SPECIAL_VOLUME.to_string(), DEFAULT_CHAPTER.to_string(), ctx.stem_title(), true)
        }
        (volume, chapter) => ctx.finish(
            series,
            volume.unwrap_or_else(|| LOOSE_LEAF_VOLUME.to_string()),
            chapter.unwrap_or_else(|| DEFAULT_CHAPTER.to_string()),
            None,
            false,
        ),
    }
}

/// `chapter` sits right before `marker`, with only separators between them
/// (`Series - Ch 5 SP01`).
fn leads_into(text: &str, chapter: &Token, marker: &Token) -> bool {
    chapter.span.end <= marker.span.start
        && text
            .get(chapter.span.end..marker.span.start)
            .is_some_and(|gap| gap.chars().all(|c| c.is_whitespace() || matches!(c, '-' | '_' | ',' | '.' | ':' | '~')))
}
