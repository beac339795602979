//! Path normalization and the small path helpers the strategies share.
//!
//! Every path that enters the engine goes through [`normalize_path`] first,
//! so the helpers below only ever see `/` separators.

/// Canonicalize separators: backslashes become `/` and runs of separators
/// collapse to one. A leading `//` (UNC share) is preserved, as are drive
/// prefixes such as `M:/`. Idempotent and total.
pub fn normalize_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    // UNC prefix survives collapsing.
    if path.len() >= 2 && path.starts_with(['/', '\\']) && path[1..].starts_with(['/', '\\']) {
        out.push('/');
    }

    let mut previous_sep = false;
    for c in path.chars() {
        let c = if c == '\\' { '/' } else { c };
        if c == '/' && previous_sep {
            continue;
        }
        previous_sep = c == '/';
        out.push(c);
    }
    out
}

/// Final path component (file name with extension).
pub(crate) fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// File name without its extension. `.tar.gz` counts as one extension.
pub(crate) fn file_stem(name: &str) -> &str {
    if name.len() > ".tar.gz".len() && name.to_ascii_lowercase().ends_with(".tar.gz") {
        return &name[..name.len() - ".tar.gz".len()];
    }
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

/// Lowercased extension without the dot, or `""`.
pub(crate) fn extension(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    if lower.len() > ".tar.gz".len() && lower.ends_with(".tar.gz") {
        return "tar.gz".to_string();
    }
    match lower.rfind('.') {
        Some(idx) if idx > 0 => lower[idx + 1..].to_string(),
        _ => String::new(),
    }
}

/// Last non-empty component of a directory path (`"E:/Manga/Accel World/"` → `"Accel World"`).
pub(crate) fn folder_name(dir: &str) -> &str {
    dir.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}

/// True when two directory paths name the same folder, ignoring trailing
/// separators and ASCII case.
pub(crate) fn same_dir(a: &str, b: &str) -> bool {
    a.trim_end_matches('/').eq_ignore_ascii_case(b.trim_end_matches('/'))
}

/// Folder names strictly between `root` and the file at `file_path`, deepest
/// first. `None` when `file_path` does not live under `root`.
///
/// ```text
/// root       E:/Manga/
/// file_path  E:/Manga/Summer Time Rendering/Specials/Record 014.cbr
/// result     ["Specials", "Summer Time Rendering"]
/// ```
pub(crate) fn folders_till_root(root: &str, file_path: &str) -> Option<Vec<String>> {
    let root = root.trim_end_matches('/');
    let relative = if root.is_empty() {
        file_path.trim_start_matches('/')
    } else {
        let prefix_len = root.len();
        let bytes = file_path.as_bytes();
        if bytes.len() <= prefix_len
            || !bytes[..prefix_len].eq_ignore_ascii_case(root.as_bytes())
            || bytes[prefix_len] != b'/'
        {
            return None;
        }
        &file_path[prefix_len + 1..]
    };

    let mut components: Vec<String> = relative.split('/').filter(|c| !c.is_empty()).map(str::to_string).collect();
    // The last component is the file itself.
    components.pop();
    components.reverse();
    Some(components)
}
