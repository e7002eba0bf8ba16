//! Property-based tests for the projection (filter + sort)
//!
//! Tests invariants:
//! - Projection is exactly the set of matching items
//! - Curated order is preserved when unsorted
//! - Descending order reverses ascending order for distinct keys

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use crate::core::catalog::Item;
use crate::core::projection::{project, FilterSortState, SortMode};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_word() -> impl Strategy<Value = String> {
    "[A-Za-z][a-z]{0,7}( [A-Za-z][a-z]{0,7}){0,2}"
}

fn arb_year() -> impl Strategy<Value = String> {
    (1400u32..2030).prop_map(|y| y.to_string())
}

/// Catalog items with unique ids.
fn arb_items() -> impl Strategy<Value = Vec<Arc<Item>>> {
    prop::collection::vec((arb_word(), arb_word(), arb_year(), arb_word()), 0..20).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (title, creator, year, description))| {
                    Arc::new(Item {
                        id: format!("item-{i}"),
                        title,
                        creator,
                        year,
                        description,
                        image_ref: format!("images/{i}.jpg"),
                    })
                })
                .collect()
        },
    )
}

fn arb_sort_mode() -> impl Strategy<Value = SortMode> {
    prop::sample::select(SortMode::ALL.to_vec())
}

fn arb_filters() -> impl Strategy<Value = FilterSortState> {
    (
        prop_oneof![Just(String::new()), "[a-z]{1,3}"],
        arb_sort_mode(),
        prop::option::of(prop::sample::select(vec!['A', 'E', 'M', 'S', 'T'])),
        prop::option::of(arb_year()),
    )
        .prop_map(|(search_text, sort_mode, letter_filter, year_filter)| FilterSortState {
            search_text,
            sort_mode,
            letter_filter,
            year_filter,
        })
}

fn matches(item: &Item, state: &FilterSortState) -> bool {
    let needle = state.search_text.to_lowercase();
    let search_ok = needle.is_empty()
        || item.title.to_lowercase().contains(&needle)
        || item.creator.to_lowercase().contains(&needle)
        || item.description.to_lowercase().contains(&needle);
    let letter_ok = state
        .letter_filter
        .map_or(true, |l| item.title.to_uppercase().starts_with(l));
    let year_ok = state.year_filter.as_deref().map_or(true, |y| item.year == y);
    search_ok && letter_ok && year_ok
}

fn ids(items: &[Arc<Item>]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: the projection holds exactly the matching items, once each
    #[test]
    fn prop_projection_is_exact_filter(items in arb_items(), state in arb_filters()) {
        let projected = project(&items, &state);

        for item in &projected {
            prop_assert!(matches(item, &state), "{:?} should not pass {:?}", item.id, state);
        }
        let expected = items.iter().filter(|i| matches(i, &state)).count();
        prop_assert_eq!(projected.len(), expected);

        let unique: HashSet<_> = projected.iter().map(|i| i.id.as_str()).collect();
        prop_assert_eq!(unique.len(), projected.len());
    }

    /// Property: curated order keeps catalog order
    #[test]
    fn prop_default_sort_keeps_catalog_order(items in arb_items(), mut state in arb_filters()) {
        state.sort_mode = SortMode::Default;
        let projected = ids(&project(&items, &state));
        let expected: Vec<String> = items
            .iter()
            .filter(|i| matches(i, &state))
            .map(|i| i.id.clone())
            .collect();
        prop_assert_eq!(projected, expected);
    }

    /// Property: year-asc is non-decreasing, year-desc non-increasing
    #[test]
    fn prop_year_sorts_are_monotonic(items in arb_items()) {
        let asc = project(&items, &FilterSortState { sort_mode: SortMode::YearAsc, ..Default::default() });
        let desc = project(&items, &FilterSortState { sort_mode: SortMode::YearDesc, ..Default::default() });
        prop_assert!(asc.windows(2).all(|w| w[0].year_number() <= w[1].year_number()));
        prop_assert!(desc.windows(2).all(|w| w[0].year_number() >= w[1].year_number()));
    }

    /// Property: with distinct titles, title-desc is title-asc reversed
    #[test]
    fn prop_title_desc_reverses_asc(items in arb_items()) {
        let mut seen = HashSet::new();
        let distinct: Vec<Arc<Item>> = items
            .into_iter()
            .filter(|i| seen.insert(i.title.clone()))
            .collect();

        let asc = ids(&project(&distinct, &FilterSortState { sort_mode: SortMode::TitleAsc, ..Default::default() }));
        let mut desc = ids(&project(&distinct, &FilterSortState { sort_mode: SortMode::TitleDesc, ..Default::default() }));
        desc.reverse();
        prop_assert_eq!(asc, desc);
    }

    /// Property: search is case-insensitive
    #[test]
    fn prop_search_ignores_case(items in arb_items(), needle in "[a-z]{1,4}") {
        let lower = FilterSortState { search_text: needle.clone(), ..Default::default() };
        let upper = FilterSortState { search_text: needle.to_uppercase(), ..Default::default() };
        prop_assert_eq!(ids(&project(&items, &lower)), ids(&project(&items, &upper)));
    }

    /// Property: projecting is deterministic
    #[test]
    fn prop_projection_is_deterministic(items in arb_items(), state in arb_filters()) {
        prop_assert_eq!(ids(&project(&items, &state)), ids(&project(&items, &state)));
    }
}
