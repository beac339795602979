//! Chapter ordering for reader navigation.
//!
//! Comparison key, most significant first:
//!
//! 1. volume tier: regular volumes, then loose-leaf, then specials;
//! 2. non-special chapters before special ones;
//! 3. volume lower bound, ascending;
//! 4. the persisted `sort_order`;
//! 5. input position, so the order is total even for duplicate units.

use crate::{LOOSE_LEAF_VOLUME_NUMBER, ParsedFileInfo, SPECIAL_VOLUME_NUMBER, min_number_from_range};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The per-chapter sort key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChapterOrderingUnit {
    pub volume_min_number: f32,
    pub is_special: bool,
    pub sort_order: i64,
}

impl ChapterOrderingUnit {
    pub fn new(volume_min_number: f32, is_special: bool, sort_order: i64) -> Self {
        ChapterOrderingUnit { volume_min_number, is_special, sort_order }
    }

    /// Key for a parsed file; `sort_order` is whatever the caller persisted.
    pub fn from_parsed(info: &ParsedFileInfo, sort_order: i64) -> Self {
        ChapterOrderingUnit::new(min_number_from_range(&info.volumes), info.is_special, sort_order)
    }

    fn tier(&self) -> u8 {
        if self.volume_min_number == LOOSE_LEAF_VOLUME_NUMBER as f32 {
            1
        } else if self.volume_min_number == SPECIAL_VOLUME_NUMBER as f32 {
            2
        } else {
            0
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.tier()
            .cmp(&other.tier())
            .then(self.is_special.cmp(&other.is_special))
            .then(self.volume_min_number.total_cmp(&other.volume_min_number))
            .then(self.sort_order.cmp(&other.sort_order))
    }
}

/// Indices of `chapters` in reading order.
///
/// ```
/// use bindery::{ChapterOrderingUnit, order};
///
/// let chapters = [
///     ChapterOrderingUnit::new(100_000.0, true, 0),
///     ChapterOrderingUnit::new(2.0, false, 0),
///     ChapterOrderingUnit::new(-100_000.0, false, 0),
///     ChapterOrderingUnit::new(1.0, false, 5),
///     ChapterOrderingUnit::new(1.0, false, 1),
/// ];
/// assert_eq!(order(&chapters), vec![4, 3, 1, 2, 0]);
/// ```
pub fn order(chapters: &[ChapterOrderingUnit]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..chapters.len()).collect();
    indices.sort_by(|&a, &b| chapters[a].compare(&chapters[b]).then(a.cmp(&b)));
    indices
}

/// Sort `items` in place by the unit `key` derives for each. Stable, so equal
/// keys keep their input order exactly as [`order`] does.
pub fn sort_chapters<T>(items: &mut [T], key: impl Fn(&T) -> ChapterOrderingUnit) {
    items.sort_by(|a, b| key(a).compare(&key(b)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LibraryType, dispatch};

    fn unit(volume: f32, is_special: bool, sort_order: i64) -> ChapterOrderingUnit {
        ChapterOrderingUnit::new(volume, is_special, sort_order)
    }

    #[test]
    fn tiers_come_first() {
        let chapters = [
            unit(SPECIAL_VOLUME_NUMBER as f32, true, 0),
            unit(LOOSE_LEAF_VOLUME_NUMBER as f32, false, 0),
            unit(3.0, false, 0),
        ];
        assert_eq!(order(&chapters), vec![2, 1, 0]);
    }

    #[test]
    fn specials_follow_regular_chapters_within_a_tier() {
        let chapters = [unit(1.0, true, 0), unit(2.0, false, 0), unit(1.0, false, 9)];
        assert_eq!(order(&chapters), vec![2, 1, 0]);
    }

    #[test]
    fn volume_then_sort_order_then_position() {
        let chapters = [unit(2.0, false, 1), unit(1.5, false, 7), unit(2.0, false, 0), unit(2.0, false, 0)];
        assert_eq!(order(&chapters), vec![1, 2, 3, 0]);
    }

    #[test]
    fn ordering_is_idempotent() {
        let chapters = [
            unit(5.0, false, 3),
            unit(LOOSE_LEAF_VOLUME_NUMBER as f32, false, 1),
            unit(SPECIAL_VOLUME_NUMBER as f32, true, 2),
            unit(0.0, false, 0),
            unit(5.0, true, 0),
            unit(5.0, false, 3),
        ];
        let first = order(&chapters);
        let sorted: Vec<ChapterOrderingUnit> = first.iter().map(|&i| chapters[i]).collect();
        assert_eq!(order(&sorted), (0..sorted.len()).collect::<Vec<_>>());

        let mut permutation = first.clone();
        permutation.sort_unstable();
        assert_eq!(permutation, (0..chapters.len()).collect::<Vec<_>>());
    }

    #[test]
    fn empty_input() {
        assert!(order(&[]).is_empty());
    }

    #[test]
    fn sort_chapters_matches_order() {
        let mut items = vec![("special", unit(100_000.0, true, 0)), ("v2", unit(2.0, false, 0)), ("v1", unit(1.0, false, 0))];
        sort_chapters(&mut items, |(_, unit)| *unit);
        let names: Vec<&str> = items.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["v1", "v2", "special"]);
    }

    #[test]
    fn units_from_parsed_files() {
        let root = "E:/Manga/";
        let regular = dispatch("E:/Manga/Series/Series v02 ch10.cbz", "E:/Manga/Series/", root, LibraryType::Manga).unwrap();
        let loose = dispatch("E:/Manga/Series/Series ch11.cbz", "E:/Manga/Series/", root, LibraryType::Manga).unwrap();
        let special = dispatch("E:/Manga/Series/Series SP01.cbz", "E:/Manga/Series/", root, LibraryType::Manga).unwrap();

        let units = [
            ChapterOrderingUnit::from_parsed(&special, 0),
            ChapterOrderingUnit::from_parsed(&loose, 1),
            ChapterOrderingUnit::from_parsed(&regular, 2),
        ];
        assert_eq!(units[2].volume_min_number, 2.0);
        assert!(units[0].is_special);
        assert_eq!(order(&units), vec![2, 1, 0]);
    }
}
