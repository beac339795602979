//! File-kind predicates.
//!
//! All checks look at the extension only (case-insensitive) and accept a
//! bare file name or a full path with either separator style.

use crate::path;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "avif"];
const ARCHIVE_EXTENSIONS: &[&str] = &["cbz", "zip", "rar", "cbr", "7z", "cb7", "cbt", "tar.gz"];

fn ext_of(file: &str) -> String {
    let normalized = path::normalize_path(file);
    path::extension(path::file_name(&normalized))
}

pub fn is_image(file: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext_of(file).as_str())
}

pub fn is_archive(file: &str) -> bool {
    ARCHIVE_EXTENSIONS.contains(&ext_of(file).as_str())
}

pub fn is_epub(file: &str) -> bool {
    ext_of(file) == "epub"
}

pub fn is_pdf(file: &str) -> bool {
    ext_of(file) == "pdf"
}

/// True for an image whose stem names it as a cover (`cover.jpg`,
/// `Series - Cover.png`, `folder.webp`). Back covers are not covers.
pub fn is_cover_image(file: &str) -> bool {
    if !is_image(file) {
        return false;
    }
    let normalized = path::normalize_path(file);
    has_cover_word(path::file_stem(path::file_name(&normalized)))
}

/// Standalone `cover` / `folder` word not preceded by `back`.
pub(crate) fn has_cover_word(stem: &str) -> bool {
    let text = stem.replace('_', " ");
    regex!(r"(?i)(?:^|[^\p{L}0-9])(?:(?P<back>back)[\s\-]*)?(?:cover|folder)(?:$|[^\p{L}0-9])")
        .captures_iter(&text)
        .any(|caps| caps.name("back").is_none())
}
