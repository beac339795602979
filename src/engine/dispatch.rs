//! Dispatcher: blacklist, strategy selection, parse.

use super::strategy::{FileContext, Strategy};
use super::trigger::Buckets;
use crate::path::{file_name, normalize_path};
use crate::{LibraryType, ParsedFileInfo, Token};

/// Folders written by NAS boxes, archivers and readers, never library content.
const BLACKLISTED_FOLDERS: &[&str] = &["__macosx", "@eadir", ".yacreaderlibrary", "#recycle"];

/// A dispatch with the intermediate state kept for reports.
#[derive(Debug, Clone)]
pub(crate) struct Dispatched {
    pub path: String,
    pub text: String,
    pub strategy: Option<Strategy>,
    pub buckets: Buckets,
    pub tokens: Vec<Token>,
    pub result: Option<ParsedFileInfo>,
}

impl Dispatched {
    fn skipped(path: String) -> Self {
        Dispatched { path, text: String::new(), strategy: None, buckets: Buckets::empty(), tokens: Vec::new(), result: None }
    }
}

pub(crate) fn is_blacklisted(path: &str) -> bool {
    file_name(path).starts_with("._")
        || path.split('/').any(|component| BLACKLISTED_FOLDERS.iter().any(|name| component.eq_ignore_ascii_case(name)))
}

pub(crate) fn run(path: &str, folder: &str, root: &str, library: LibraryType) -> Dispatched {
    let path = normalize_path(path);

    if is_blacklisted(&path) {
        tracing::trace!(%path, "blacklisted path skipped");
        return Dispatched::skipped(path);
    }

    let Some(strategy) = Strategy::select(&path, library) else {
        tracing::trace!(%path, %library, "no applicable strategy");
        return Dispatched::skipped(path);
    };

    let ctx = FileContext::new(&path, folder, root, library);
    let result = strategy.parse_context(&ctx);
    tracing::trace!(%path, strategy = strategy.name(), parsed = result.is_some(), "dispatched");

    Dispatched {
        tokens: ctx.analysis.tokens(),
        text: ctx.text,
        buckets: ctx.buckets,
        strategy: Some(strategy),
        result,
        path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blacklist() {
        assert!(is_blacklisted("E:/Manga/Series/__MACOSX/Vol 1.cbz"));
        assert!(is_blacklisted("/volume1/manga/@eaDir/Vol 1.cbz/SYNOFILE_THUMB_M.jpg"));
        assert!(is_blacklisted("E:/Manga/#recycle/Vol 1.cbz"));
        assert!(is_blacklisted("E:/Manga/Series/._Vol 1.cbz"));
        assert!(!is_blacklisted("E:/Manga/Series/Vol 1.cbz"));
        assert!(!is_blacklisted("E:/Manga/MACOSX fans/Vol 1.cbz"));
    }

    #[test]
    fn skipped_runs_carry_no_tokens() {
        let blacklisted =
            run("E:/Manga/Series/__MACOSX/Vol 1.cbz", "E:/Manga/Series/__MACOSX/", "E:/Manga/", LibraryType::Manga);
        assert_eq!(blacklisted.strategy, None);
        assert!(blacklisted.tokens.is_empty());
        assert!(blacklisted.result.is_none());

        let unsupported = run("E:/Manga/Series/notes.txt", "E:/Manga/Series/", "E:/Manga/", LibraryType::Manga);
        assert_eq!(unsupported.strategy, None);
        assert!(unsupported.result.is_none());
    }

    #[test]
    fn runs_keep_tokens_and_text() {
        let outcome = run(
            r"E:\Manga\Beelzebub\Beelzebub_01_[Noodles].zip",
            r"E:\Manga\Beelzebub",
            r"E:\Manga",
            LibraryType::Manga,
        );
        assert_eq!(outcome.path, "E:/Manga/Beelzebub/Beelzebub_01_[Noodles].zip");
        assert_eq!(outcome.text, "Beelzebub 01 [Noodles]");
        assert_eq!(outcome.strategy, Some(Strategy::Basic));
        assert_eq!(outcome.tokens.len(), 1);
        assert_eq!(outcome.result.map(|info| info.chapters).as_deref(), Some("1"));
    }
}
