//! Numeric range resolution for volume and chapter values.
//!
//! Ranges arrive either as canonical text (`"12"`, `"1-8"`, `"6.5"`), as raw
//! captures (`"001-c008"`) or as one of the sentinel strings. The resolver
//! never fails: anything it cannot read resolves to `0.0`, which callers
//! treat as "no numeric range recoverable".

/// Lower bound of `range`, or `0.0` when nothing numeric can be recovered.
///
/// ```
/// use bindery::min_number_from_range;
///
/// assert_eq!(min_number_from_range("12-14"), 12.0);
/// assert_eq!(min_number_from_range("2.5"), 2.5);
/// assert_eq!(min_number_from_range("Vol"), 0.0);
/// ```
pub fn min_number_from_range(range: &str) -> f32 {
    bounds(range).map_or(0.0, |(min, _)| min)
}

/// Upper bound of `range`, or `0.0` when nothing numeric can be recovered.
pub fn max_number_from_range(range: &str) -> f32 {
    bounds(range).map_or(0.0, |(_, max)| max)
}

/// `(min, max)` with `min <= max`.
fn bounds(range: &str) -> Option<(f32, f32)> {
    let cleaned: String = range.chars().filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-').collect();
    if cleaned.is_empty() {
        return None;
    }

    if !regex!(r"[0-9]-[0-9]").is_match(&cleaned) {
        let value = cleaned.parse::<f32>().ok().filter(|v| v.is_finite())?;
        return Some((value, value));
    }

    let values: Vec<f32> = cleaned
        .split('-')
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .collect();
    let min = values.iter().copied().reduce(f32::min)?;
    let max = values.iter().copied().reduce(f32::max)?;
    Some((min, max))
}

/// Canonical text for a captured range: leading zeros dropped per bound,
/// stray chapter prefixes removed, at most two bounds kept.
///
/// ```
/// use bindery::format_range;
///
/// assert_eq!(format_range("076"), "76");
/// assert_eq!(format_range("001-008"), "1-8");
/// assert_eq!(format_range("01-c02"), "1-2");
/// assert_eq!(format_range("00.5"), "0.5");
/// ```
pub fn format_range(raw: &str) -> String {
    let mut parts = raw
        .split('-')
        .map(|part| part.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect::<String>())
        .filter(|part| !part.is_empty())
        .map(|part| strip_leading_zeros(&part));

    match (parts.next(), parts.next()) {
        (Some(from), Some(to)) => format!("{from}-{to}"),
        (Some(from), None) => from,
        _ => String::new(),
    }
}

fn strip_leading_zeros(number: &str) -> String {
    let trimmed = number.trim_start_matches('0');
    if trimmed.is_empty() || trimmed.starts_with('.') { format!("0{trimmed}") } else { trimmed.to_string() }
}
