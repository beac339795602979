//! Trigger scanning (input pre-classification).
//!
//! Before any extractor runs, the text is scanned once for coarse signals
//! that decide which regex tables are worth evaluating:
//!
//! - no ASCII digit means no volume, chapter or `SP` marker can match, so the
//!   numeric tables are skipped entirely;
//! - no bracket character means the bracket-group scan is skipped;
//! - the keyword buckets gate the special-marker and edition tables.
//!
//! This is a *heuristic* scan. False positives are fine because the tables
//! still have to match in full; false negatives are not, so every keyword
//! below is a substring of something the gated table can match.

use bitflags::bitflags;

bitflags! {
    /// Coarse input characteristics.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Buckets: u8 {
        const HAS_DIGITS = 1 << 0;
        const HAS_BRACKETS = 1 << 1;
        const SPECIALISH = 1 << 2;
        const EDITIONISH = 1 << 3;
    }
}

const SPECIAL_KEYS: &[&str] = &["sp", "omake", "shot", "side stor", "bonus", "extra", "art collection", "annual"];

const EDITION_KEYS: &[&str] = &[
    "omnibus",
    "deluxe",
    "uncensored",
    "full",
    "kanzenban",
    "complete",
    "perfect",
    "collector",
    "edition",
];

impl Buckets {
    /// Scan `input` for coarse buckets.
    pub fn scan(input: &str) -> Self {
        let mut buckets = Buckets::empty();
        let lower = input.to_lowercase();

        if input.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= Buckets::HAS_DIGITS;
        }

        if input.contains(['[', ']', '(', ')', '{', '}']) {
            buckets |= Buckets::HAS_BRACKETS;
        }

        if SPECIAL_KEYS.iter().any(|key| lower.contains(key)) {
            buckets |= Buckets::SPECIALISH;
        }

        // Underscores are already spaces by the time text is scanned, but
        // editions such as `Full_Color` may still reach us from folder names.
        if EDITION_KEYS.iter().any(|key| lower.contains(key)) {
            buckets |= Buckets::EDITIONISH;
        }

        buckets
    }

    /// Flag names, for debug output.
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}
