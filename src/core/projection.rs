//! Catalog projection: the filtered, sorted view that navigation runs over.
//!
//! `project` is pure. It sorts a copy of the catalog according to the
//! [`SortMode`], then keeps the items passing the search, letter and year
//! predicates (AND-combined). The catalog itself is never reordered.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::catalog::Item;

/// Letters offered by the alphabetical filter.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

// ── Sort mode ───────────────────────────────────────────────────────────────

/// Ordering applied before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Catalog (curated) order.
    #[default]
    Default,
    TitleAsc,
    TitleDesc,
    #[serde(alias = "artist-asc")]
    CreatorAsc,
    #[serde(alias = "artist-desc")]
    CreatorDesc,
    YearAsc,
    YearDesc,
}

impl SortMode {
    /// All variants in selector order.
    pub const ALL: [SortMode; 7] = [
        Self::Default,
        Self::TitleAsc,
        Self::TitleDesc,
        Self::CreatorAsc,
        Self::CreatorDesc,
        Self::YearAsc,
        Self::YearDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
            Self::CreatorAsc => "creator-asc",
            Self::CreatorDesc => "creator-desc",
            Self::YearAsc => "year-asc",
            Self::YearDesc => "year-desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Curated order",
            Self::TitleAsc => "Title (A-Z)",
            Self::TitleDesc => "Title (Z-A)",
            Self::CreatorAsc => "Artist (A-Z)",
            Self::CreatorDesc => "Artist (Z-A)",
            Self::YearAsc => "Year (oldest)",
            Self::YearDesc => "Year (newest)",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            Self::Default => Ordering::Equal,
            Self::TitleAsc => collate(&a.title, &b.title),
            Self::TitleDesc => collate(&b.title, &a.title),
            Self::CreatorAsc => collate(&a.creator, &b.creator),
            Self::CreatorDesc => collate(&b.creator, &a.creator),
            Self::YearAsc => a.year_number().cmp(&b.year_number()),
            Self::YearDesc => b.year_number().cmp(&a.year_number()),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "artist-asc" => Ok(Self::CreatorAsc),
            "artist-desc" => Ok(Self::CreatorDesc),
            other => Self::ALL
                .into_iter()
                .find(|m| m.as_str() == other)
                .ok_or_else(|| format!("unknown sort mode: {other}")),
        }
    }
}

/// Locale-style string ordering: case-folded first, lower case before
/// upper case on ties, raw text last.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map_or(Ordering::Equal, |(x, y)| {
                    match (x.is_lowercase(), y.is_lowercase()) {
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        _ => Ordering::Equal,
                    }
                })
        })
        .then_with(|| a.cmp(b))
}

// ── Filter/sort state ───────────────────────────────────────────────────────

/// Raw user-chosen filter and sort inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSortState {
    pub search_text: String,
    pub sort_mode: SortMode,
    /// Single upper-case letter.
    pub letter_filter: Option<char>,
    pub year_filter: Option<String>,
}

impl FilterSortState {
    /// Whether any filter (not sort) narrows the catalog.
    pub fn is_filtering(&self) -> bool {
        !self.search_text.is_empty() || self.letter_filter.is_some() || self.year_filter.is_some()
    }

    fn matches(&self, item: &Item, needle: &str) -> bool {
        let search_ok = needle.is_empty()
            || item.title.to_lowercase().contains(needle)
            || item.creator.to_lowercase().contains(needle)
            || item.description.to_lowercase().contains(needle);
        let letter_ok = self
            .letter_filter
            .map_or(true, |letter| item.title_starts_with(letter));
        let year_ok = self
            .year_filter
            .as_deref()
            .map_or(true, |year| item.year == year);

        search_ok && letter_ok && year_ok
    }
}

/// Compute the projection of `items` under `state`.
pub fn project(items: &[Arc<Item>], state: &FilterSortState) -> Vec<Arc<Item>> {
    let mut sorted: Vec<Arc<Item>> = items.to_vec();
    if state.sort_mode != SortMode::Default {
        // `sort_by` is stable: equal keys keep catalog order.
        sorted.sort_by(|a, b| state.sort_mode.compare(a, b));
    }

    let needle = state.search_text.to_lowercase();
    sorted.retain(|item| state.matches(item, &needle));
    sorted
}

// ── Filter controls ─────────────────────────────────────────────────────────

/// Normalize a key press into a filter letter.
pub fn normalize_letter(c: char) -> Option<char> {
    c.is_ascii_alphabetic().then(|| c.to_ascii_uppercase())
}

/// Whether any catalog title starts with `letter`, regardless of filters.
pub fn letter_available(items: &[Arc<Item>], letter: char) -> bool {
    items.iter().any(|item| item.title_starts_with(letter))
}

/// Every letter of the alphabet with its availability.
pub fn available_letters(items: &[Arc<Item>]) -> Vec<(char, bool)> {
    ALPHABET
        .iter()
        .map(|&letter| (letter, letter_available(items, letter)))
        .collect()
}

/// Distinct catalog years, newest first.
pub fn distinct_years(items: &[Arc<Item>]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut years: Vec<String> = items
        .iter()
        .filter(|item| seen.insert(item.year.as_str()))
        .map(|item| item.year.clone())
        .collect();
    years.sort_by(|a, b| {
        let (na, nb) = (a.parse::<u32>().ok(), b.parse::<u32>().ok());
        nb.cmp(&na)
    });
    years
}
