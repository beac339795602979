//! Loose images.
//!
//! In Manga and Comic libraries an image is only a release when its own name
//! carries an explicit volume or chapter; covers and stray pages are
//! skipped. In Image libraries the folders are the structure: series comes
//! from the folder chain and folder tokens beat filename tokens.

use super::basic::assemble;
use super::strategy::FileContext;
use crate::rules::predicates::has_cover_word;
use crate::{DEFAULT_CHAPTER, LOOSE_LEAF_VOLUME, LibraryType, ParsedFileInfo, SPECIAL_VOLUME};

pub(crate) fn parse(ctx: &FileContext) -> Option<ParsedFileInfo> {
    match ctx.library {
        LibraryType::Image => parse_image_library(ctx),
        _ => parse_page(ctx),
    }
}

fn parse_page(ctx: &FileContext) -> Option<ParsedFileInfo> {
    if has_cover_word(&ctx.stem) {
        tracing::trace!(path = %ctx.full_path, "cover image skipped");
        return None;
    }
    if ctx.analysis.volume.is_none() && ctx.analysis.explicit_chapter().is_none() {
        tracing::trace!(path = %ctx.full_path, "image without volume or chapter marker skipped");
        return None;
    }
    assemble(ctx, &ctx.chain())
}

fn parse_image_library(ctx: &FileContext) -> Option<ParsedFileInfo> {
    let chain = ctx.chain();
    let analysis = &ctx.analysis;
    let series = chain.series().or_else(|| ctx.stem_series())?;

    if analysis.is_special() {
        return ctx.finish(series, SPECIAL_VOLUME.to_string(), DEFAULT_CHAPTER.to_string(), ctx.special_title(), true);
    }

    let volume = chain.volume().or_else(|| analysis.volume.as_ref().map(|token| token.value.clone()));
    let chapter = chain.chapter().or_else(|| analysis.explicit_chapter().map(|token| token.value.clone()));

    match (volume, chapter) {
        (None, None) => {
            let title = ctx.stem_title().unwrap_or_else(|| ctx.stem.clone());
            ctx.finish(series, SPECIAL_VOLUME.to_string(), DEFAULT_CHAPTER.to_string(), Some(title), true)
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
