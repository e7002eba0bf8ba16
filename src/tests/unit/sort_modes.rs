//! Table-driven tests for sort modes over the five-artwork fixture.

use rstest::rstest;

use crate::core::projection::SortMode;
use crate::tests::common::{carousel_engine, five_item_catalog, projection_ids};

#[rstest]
#[case::curated(SortMode::Default, &["a", "b", "c", "d", "e"])]
#[case::title_asc(SortMode::TitleAsc, &["d", "e", "a", "c", "b"])]
#[case::title_desc(SortMode::TitleDesc, &["b", "c", "a", "e", "d"])]
#[case::creator_asc(SortMode::CreatorAsc, &["e", "a", "c", "d", "b"])]
#[case::creator_desc(SortMode::CreatorDesc, &["b", "d", "c", "a", "e"])]
#[case::year_asc(SortMode::YearAsc, &["a", "b", "c", "d", "e"])]
#[case::year_desc(SortMode::YearDesc, &["e", "c", "d", "b", "a"])]
fn test_sort_order(#[case] mode: SortMode, #[case] expected: &[&str]) {
    let mut engine = carousel_engine(five_item_catalog());
    engine.set_sort_mode(mode);
    assert_eq!(projection_ids(&engine), expected);
}

#[rstest]
#[case("default", SortMode::Default)]
#[case("title-asc", SortMode::TitleAsc)]
#[case("title-desc", SortMode::TitleDesc)]
#[case("creator-asc", SortMode::CreatorAsc)]
#[case("artist-asc", SortMode::CreatorAsc)]
#[case("artist-desc", SortMode::CreatorDesc)]
#[case("year-asc", SortMode::YearAsc)]
#[case("year-desc", SortMode::YearDesc)]
fn test_sort_mode_parse(#[case] input: &str, #[case] expected: SortMode) {
    assert_eq!(input.parse::<SortMode>().unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("TITLE-ASC")]
#[case("random")]
fn test_sort_mode_parse_rejects(#[case] input: &str) {
    assert!(input.parse::<SortMode>().is_err());
}

#[test]
fn test_sort_cycle_visits_every_mode() {
    let mut mode = SortMode::Default;
    let mut seen = vec![mode];
    for _ in 1..SortMode::ALL.len() {
        mode = mode.next();
        seen.push(mode);
    }
    assert_eq!(seen, SortMode::ALL.to_vec());
    assert_eq!(mode.next(), SortMode::Default);
    assert_eq!(SortMode::Default.prev(), SortMode::YearDesc);
}

#[test]
fn test_sort_then_filter_keeps_sorted_order() {
    let mut engine = carousel_engine(five_item_catalog());
    engine.set_sort_mode(SortMode::TitleDesc);
    engine.set_search_text("the");
    assert_eq!(projection_ids(&engine), ["b", "c"]);
}
