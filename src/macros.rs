/// Compile a regex literal once and hand out a `&'static Regex`.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Compile an ordered table of regex literals once and hand out a
/// `&'static [Regex]`. Table order is the tie-break order for extractors.
#[macro_export]
macro_rules! regex_table {
    ( $($pat:literal),+ $(,)? ) => {{
        static TABLE: once_cell::sync::Lazy<Vec<regex::Regex>> =
            once_cell::sync::Lazy::new(|| vec![ $(regex::Regex::new($pat).unwrap()),+ ]);
        TABLE.as_slice()
    }};
}
