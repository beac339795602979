use super::Analysis;
use crate::LibraryType;

/// (library, text, volume, chapter, edition, special)
type Case = (LibraryType, &'static str, Option<&'static str>, Option<&'static str>, Option<&'static str>, bool);

fn check(cases: &[Case]) {
    for &(library, text, volume, chapter, edition, special) in cases {
        let analysis = Analysis::run(text, library);
        let got_volume = analysis.volume.as_ref().map(|token| token.value.as_str());
        let got_chapter = analysis.chapter.as_ref().map(|token| token.value.as_str());
        let got_edition = analysis.edition.as_ref().map(|token| token.value.as_str());

        assert_eq!(got_volume, volume, "volume for {text:?} ({library})");
        assert_eq!(got_chapter, chapter, "chapter for {text:?} ({library})");
        assert_eq!(got_edition, edition, "edition for {text:?} ({library})");
        assert_eq!(analysis.is_special(), special, "special for {text:?} ({library})");
    }
}

#[test]
fn manga_examples() {
    use LibraryType::Manga;
    let cases: Vec<Case> = vec![
        (Manga, "Mujaki no Rakuen Vol12 ch76", Some("12"), Some("76"), None, false),
        (Manga, "Beelzebub 01 [Noodles]", None, Some("1"), None, false),
        (Manga, "Accel World - Volume 1 Chapter 2", Some("1"), Some("2"), None, false),
        (Manga, "Air Gear Omnibus v01 (2016) (Digital) (Shadowcat-Empire)", Some("1"), None, Some("Omnibus"), false),
        (Manga, "Vol 1", Some("1"), None, None, false),
        (Manga, "Series v01 005", Some("1"), Some("5"), None, false),
        (Manga, "Series Vol.2.5 Ch.006.5", Some("2.5"), Some("6.5"), None, false),
        (Manga, "Series v01-03", Some("1-3"), None, None, false),
        (Manga, "Series c001-c008 (v01)", None, Some("1-8"), None, false),
        (Manga, "Tonikaku.Kawaii.v05", Some("5"), None, None, false),
        (Manga, "ワンパンマン 第3巻", Some("3"), None, None, false),
        (Manga, "进击的巨人 第139话", None, Some("139"), None, false),
        (Manga, "Tower Of God S01 014", Some("1"), Some("14"), None, false),
    ];
    check(&cases);
}

#[test]
fn numbers_ahead_of_the_volume_belong_to_the_series() {
    use LibraryType::{Comic, Manga};
    let cases: Vec<Case> = vec![
        (Manga, "Mob Psycho 100 v01", Some("1"), None, None, false),
        (Manga, "Hunter x Hunter 2011 v01", Some("1"), None, None, false),
        (Manga, "7 Seeds v01", Some("1"), None, None, false),
        (Manga, "Mob Psycho 100 Vol 2 (2016) (Digital)", Some("2"), None, None, false),
        (Comic, "Batman 66 v02 003", Some("2"), Some("3"), None, false),
    ];
    check(&cases);

    let analysis = Analysis::run("Mob Psycho 100 v01", Manga);
    assert_eq!(analysis.anchor(), Some(15));
}

#[test]
fn sentinel_volumes_are_held_back() {
    use LibraryType::Manga;
    let cases: Vec<Case> = vec![
        (Manga, "Series Vol 100000", None, None, None, false),
        (Manga, "Series Vol 0100000 ch 3", None, Some("3"), None, false),
    ];
    check(&cases);

    let analysis = Analysis::run("Series Vol 100000", Manga);
    assert_eq!(analysis.reserved.as_ref().map(|t| t.value.as_str()), Some("100000"));
    assert_eq!(analysis.anchor(), Some(7));
}

#[test]
fn bracket_groups_hide_numbers() {
    use LibraryType::Manga;
    let cases: Vec<Case> = vec![
        (Manga, "Record 014 (between chapter 083 and ch084) SP11", None, Some("14"), None, true),
        (Manga, "[Group 01] Series", None, None, None, false),
        (Manga, "Series (2016)", None, None, None, false),
        (Manga, "Series [v02] 12", None, Some("12"), None, false),
    ];
    check(&cases);
}

#[test]
fn special_examples() {
    use LibraryType::Manga;
    let cases: Vec<Case> = vec![
        (Manga, "[Renzokusei] Special 1 SP02", None, Some("1"), None, true),
        (Manga, "Volume Omake", None, None, None, true),
        (Manga, "Series SP01 1. Special Name", None, None, None, true),
        (Manga, "Series - Ch 5 SP01", None, Some("5"), None, true),
        (Manga, "Record 014 between chapter 083 and ch084 SP11", None, Some("83"), None, true),
        (Manga, "Series Special Edition v01", Some("1"), None, Some("Special Edition"), false),
    ];
    check(&cases);
}

#[test]
fn comic_examples() {
    use LibraryType::{Comic, ComicVine};
    let cases: Vec<Case> = vec![
        (Comic, "Batman #12 (2016)", None, Some("12"), None, false),
        (Comic, "Batman 012 (2016)", None, Some("12"), None, false),
        (ComicVine, "Saga Issue 54", None, Some("54"), None, false),
        (Comic, "Batman Annual 2", None, Some("2"), None, true),
        (Comic, "Dungeon Meshi S02", None, None, None, false),
        (Comic, "X-Men v2 001", Some("2"), Some("1"), None, false),
    ];
    check(&cases);
}

#[test]
fn book_examples() {
    use LibraryType::{Book, LightNovel};
    let cases: Vec<Case> = vec![
        (Book, "Harry Potter Book 3", Some("3"), None, None, false),
        (LightNovel, "Sword Art Online 01", None, None, None, false),
        (LightNovel, "Sword Art Online v01", Some("1"), None, None, false),
        (Book, "Dune Chapter 4", None, Some("4"), None, false),
    ];
    check(&cases);
}

#[test]
fn no_digits_no_numbers() {
    let cases: Vec<Case> = vec![
        (LibraryType::Manga, "cover", None, None, None, false),
        (LibraryType::Image, "Berserk Deluxe Edition", None, None, Some("Deluxe Edition"), false),
    ];
    check(&cases);
}

#[test]
fn tokens_are_ordered_and_anchored() {
    let analysis = Analysis::run("Air Gear Omnibus v01 (2016)", LibraryType::Manga);
    let kinds: Vec<&str> = analysis.tokens().iter().map(|token| token.kind.name()).collect();
    assert_eq!(kinds, vec!["edition", "volume"]);
    assert_eq!(analysis.anchor(), Some(9));
    assert_eq!(analysis.brackets.len(), 1);

    let bare = Analysis::run("Beelzebub 01", LibraryType::Manga);
    assert_eq!(bare.anchor(), Some(10));
    assert_eq!(bare.explicit_anchor(), None);
}

#[test]
fn title_marker_prefers_numbered_markers() {
    let analysis = Analysis::run("[Renzokusei] Special 1 SP02", LibraryType::Manga);
    assert_eq!(analysis.first_marker().map(|t| t.value.as_str()), Some("Special"));
    assert_eq!(analysis.title_marker().map(|t| t.value.as_str()), Some("SP02"));
}
