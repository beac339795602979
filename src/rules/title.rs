/// Turn a raw name fragment into a human-readable series or title.
///
/// Underscores become spaces, bracket groups and edition tags are dropped,
/// dot-separated names (`Series.Name.`) are spaced out, whitespace is
/// collapsed and separators are trimmed from both ends.
///
/// ```
/// use bindery::clean_title;
///
/// assert_eq!(clean_title("[Group] Accel_World - "), "Accel World");
/// assert_eq!(clean_title("Air Gear Omnibus "), "Air Gear");
/// assert_eq!(clean_title("Tonikaku.Kawaii."), "Tonikaku Kawaii");
/// ```
pub fn clean_title(text: &str) -> String {
    let text = text.replace('_', " ");
    let text = regex!(r"\[[^\]]*\]|\([^)]*\)|\{[^}]*\}").replace_all(&text, " ");
    let text = regex!(
        r"(?i)\b(?:Omnibus(?: Edition)?|Deluxe(?: Edition)?|Special Edition|Uncensored|Full Colou?r|Kanzenban|Complete Edition|Perfect Edition|Collector'?s Edition)\b"
    )
    .replace_all(&text, " ");

    let text = if !text.trim().contains(char::is_whitespace) && text.contains('.') {
        space_out_dots(&text)
    } else {
        text.into_owned()
    };

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_matches(|c: char| matches!(c, ' ' | '-' | '_' | '.' | ',' | ':' | '~' | '[' | '(' | '{')).to_string()
}

/// `.` becomes a space except between two digits (`Vol.2.5` → `Vol 2.5`).
fn space_out_dots(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let between_digits = i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(|next| next.is_ascii_digit());
            if c == '.' && !between_digits { ' ' } else { c }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_separators_and_groups() {
        assert_eq!(clean_title("Accel World - "), "Accel World");
        assert_eq!(clean_title("[Group] Series Name (2016) "), "Series Name");
        assert_eq!(clean_title("  Mujaki__no  Rakuen "), "Mujaki no Rakuen");
        assert_eq!(clean_title("Series {Deluxe Edition}"), "Series");
        assert_eq!(clean_title(""), "");
        assert_eq!(clean_title("[Only Group]"), "");
    }

    #[test]
    fn spaces_dotted_names() {
        assert_eq!(clean_title("Series.Name."), "Series Name");
        assert_eq!(clean_title("Vol.2.5"), "Vol 2.5");
        assert_eq!(clean_title("Dr. Stone"), "Dr. Stone");
    }

    #[test]
    fn drops_edition_tags() {
        assert_eq!(clean_title("Air Gear Omnibus "), "Air Gear");
        assert_eq!(clean_title("Vagabond Full_Color"), "Vagabond");
        assert_eq!(clean_title("Monster Kanzenban"), "Monster");
        assert_eq!(clean_title("Series Special Edition "), "Series");
    }
}
