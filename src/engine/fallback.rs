//! Folder-derived metadata.
//!
//! When a file name lacks a series, volume or chapter, the folders between
//! the library root and the file fill the gap:
//!
//! ```text
//! root   E:/Manga/
//! file   E:/Manga/Accel World/Part 2/Vol 1.cbz
//! chain  ["Part 2", "Accel World"]      deepest first
//! ```
//!
//! Special-only folders (`Specials`, `Extras` ...) never take part.

use crate::path::{folder_name, folders_till_root, same_dir};
use crate::rules::special::is_special_folder;
use crate::rules::volume::trailing_number;
use crate::rules::{Analysis, clean_title, prefix_before};
use crate::LibraryType;

#[derive(Debug, Clone)]
pub(crate) struct FolderChain {
    /// Deepest first; the last entry sits directly under the root.
    folders: Vec<String>,
    library: LibraryType,
}

impl FolderChain {
    pub fn new(full_path: &str, folder: &str, root: &str, library: LibraryType) -> Self {
        let chain = if root.trim().is_empty() { None } else { folders_till_root(root, full_path) };
        let mut folders = chain.unwrap_or_else(|| vec![folder_name(folder).to_string()]);
        folders.retain(|name| !name.trim().is_empty() && !is_special_folder(name));

        if folders.is_empty() && !folder.trim().is_empty() && !same_dir(folder, root) {
            let name = folder_name(folder);
            if !name.is_empty() && !is_special_folder(name) {
                folders.push(name.to_string());
            }
        }

        tracing::trace!(?folders, "folder chain");
        FolderChain { folders, library }
    }

    #[cfg(test)]
    pub fn folders(&self) -> &[String] {
        &self.folders
    }

    fn analyze(&self, name: &str) -> (String, Analysis) {
        let text = name.replace('_', " ");
        let analysis = Analysis::run(&text, self.library);
        (text, analysis)
    }

    /// Series from the top-most folder: the text before its first explicit
    /// volume/chapter/edition token, else the whole cleaned name.
    pub fn series(&self) -> Option<String> {
        let (text, analysis) = self.analyze(self.folders.last()?);
        analysis
            .explicit_anchor()
            .and_then(|at| prefix_before(&text, at))
            .or_else(|| Some(clean_title(&text)).filter(|series| !series.is_empty()))
    }

    /// First explicit volume token, deepest folder first. Folders below the
    /// top one may also name a volume with a trailing number, unless they
    /// already read as a chapter folder.
    pub fn volume(&self) -> Option<String> {
        let top = self.folders.len().checked_sub(1)?;
        self.folders.iter().enumerate().find_map(|(depth, name)| {
            let (text, analysis) = self.analyze(name);
            if let Some(token) = analysis.volume {
                return Some(token.value);
            }
            if depth < top && analysis.explicit_chapter().is_none() { trailing_number(&text) } else { None }
        })
    }

    /// First explicit chapter token, deepest folder first.
    pub fn chapter(&self) -> Option<String> {
        self.folders.iter().find_map(|name| {
            let (_, analysis) = self.analyze(name);
            analysis.explicit_chapter().map(|token| token.value.clone())
        })
    }
}
