//! Gallery engine: composes projection, navigation and the detail overlay.
//!
//! Every user intent enters through a method here. Filter and sort changes
//! recompute the projection and reset navigation to the first item; the
//! detail overlay, while open, locks navigation. After any transition the
//! presentation layer pulls a [`GallerySnapshot`].

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::catalog::{Catalog, Item};
use super::navigation::{Direction, Navigator};
use super::overlay::{DetailOverlay, OpenOverlay};
use super::projection::{
    available_letters, distinct_years, normalize_letter, project, FilterSortState, SortMode,
};
use super::stats::Stats;
use super::viewport::Viewport;

/// One button of the alphabetical filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterChip {
    pub letter: char,
    /// Some catalog title starts with this letter.
    pub available: bool,
    pub active: bool,
}

/// Immutable render model produced after each transition.
#[derive(Debug, Clone)]
pub struct GallerySnapshot {
    pub projection: Vec<Arc<Item>>,
    pub current_item: Option<Arc<Item>>,
    /// `current_item` is a fallback that is not part of the projection.
    pub current_is_fallback: bool,
    pub current_index: usize,
    pub projection_len: usize,
    pub stats: Stats,
    pub overlay: Option<OpenOverlay>,
    pub filters: FilterSortState,
    pub letters: Vec<LetterChip>,
    pub years: Vec<String>,
}

impl GallerySnapshot {
    /// `"X / Y"` position label; `"0 / 0"` when nothing matches.
    pub fn position_label(&self) -> String {
        if self.projection_len == 0 {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.current_index + 1, self.projection_len)
        }
    }
}

/// Browsing state engine over a static catalog.
pub struct GalleryEngine<V: Viewport> {
    catalog: Arc<Catalog>,
    filters: FilterSortState,
    projection: Vec<Arc<Item>>,
    navigator: Navigator<V>,
    overlay: DetailOverlay,
    letters: Vec<(char, bool)>,
    years: Vec<String>,
    rng: StdRng,
}

impl<V: Viewport> GalleryEngine<V> {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let filters = FilterSortState::default();
        let projection = project(catalog.items(), &filters);
        let navigator = Navigator::new(projection.len());
        let letters = available_letters(catalog.items());
        let years = distinct_years(catalog.items());

        tracing::info!(
            items = catalog.len(),
            creators = catalog.stats().distinct_creator_count,
            "Gallery engine ready"
        );

        Self {
            catalog,
            filters,
            projection,
            navigator,
            overlay: DetailOverlay::new(),
            letters,
            years,
            rng: StdRng::from_entropy(),
        }
    }

    /// Start with a given sort mode.
    pub fn with_sort_mode(mut self, mode: SortMode) -> Self {
        self.set_sort_mode(mode);
        self
    }

    /// Use a deterministic RNG for shuffle.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterSortState {
        &self.filters
    }

    pub fn projection(&self) -> &[Arc<Item>] {
        &self.projection
    }

    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    pub fn overlay(&self) -> &DetailOverlay {
        &self.overlay
    }

    pub fn stats(&self) -> &Stats {
        self.catalog.stats()
    }

    /// Navigation is locked while the detail overlay is open.
    pub fn navigation_locked(&self) -> bool {
        self.overlay.is_open()
    }

    /// Item to display and whether it is a fallback.
    ///
    /// With an empty projection this falls back to the first catalog item,
    /// which may not satisfy the active filters.
    pub fn current_item(&self) -> (Option<Arc<Item>>, bool) {
        if let Some(item) = self
            .projection
            .get(self.navigator.current_index())
            .or_else(|| self.projection.first())
        {
            return (Some(Arc::clone(item)), false);
        }
        match self.catalog.first() {
            Some(item) => (Some(Arc::clone(item)), true),
            None => (None, false),
        }
    }

    // ── Filter / sort ───────────────────────────────────────────────────

    pub fn set_search_text(&mut self, text: &str) {
        if self.filters.search_text == text {
            return;
        }
        self.filters.search_text = text.to_string();
        self.refresh();
    }

    pub fn clear_search(&mut self) {
        self.set_search_text("");
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        if self.filters.sort_mode == mode {
            return;
        }
        self.filters.sort_mode = mode;
        self.refresh();
    }

    pub fn next_sort_mode(&mut self) {
        self.set_sort_mode(self.filters.sort_mode.next());
    }

    pub fn prev_sort_mode(&mut self) {
        self.set_sort_mode(self.filters.sort_mode.prev());
    }

    /// Toggle the letter filter. Letters no catalog title starts with are
    /// unavailable and ignored. Returns `true` if the filter changed.
    pub fn toggle_letter(&mut self, letter: char) -> bool {
        let Some(letter) = normalize_letter(letter) else {
            return false;
        };
        if !self.letter_available(letter) {
            tracing::debug!(%letter, "Letter unavailable, ignoring");
            return false;
        }
        self.filters.letter_filter = if self.filters.letter_filter == Some(letter) {
            None
        } else {
            Some(letter)
        };
        self.refresh();
        true
    }

    /// Toggle the year filter (selecting the active year clears it).
    pub fn toggle_year(&mut self, year: &str) {
        self.filters.year_filter = if self.filters.year_filter.as_deref() == Some(year) {
            None
        } else {
            Some(year.to_string())
        };
        self.refresh();
    }

    /// The "All" year chip.
    pub fn clear_year_filter(&mut self) {
        if self.filters.year_filter.take().is_some() {
            self.refresh();
        }
    }

    pub fn letter_available(&self, letter: char) -> bool {
        self.letters
            .iter()
            .any(|&(l, available)| l == letter && available)
    }

    fn refresh(&mut self) {
        self.projection = project(self.catalog.items(), &self.filters);
        tracing::debug!(
            shown = self.projection.len(),
            total = self.catalog.len(),
            filters = ?self.filters,
            "Projection recomputed"
        );
        self.navigator.reset(self.projection.len());
    }

    // ── Navigation ──────────────────────────────────────────────────────

    /// Returns `true` if the index changed.
    pub fn go_to(&mut self, index: isize) -> bool {
        if self.navigation_locked() {
            return false;
        }
        self.navigator.go_to(index)
    }

    pub fn step(&mut self, direction: Direction) -> bool {
        if self.navigation_locked() {
            return false;
        }
        self.navigator.step(direction)
    }

    pub fn shuffle(&mut self) -> bool {
        if self.navigation_locked() {
            return false;
        }
        self.navigator.shuffle(&mut self.rng)
    }

    /// Select an item from an auxiliary list by id.
    ///
    /// Items outside the current projection are ignored.
    pub fn select_item(&mut self, id: &str) -> bool {
        match self.projection.iter().position(|item| item.id == id) {
            Some(index) => self.go_to(index as isize),
            None => false,
        }
    }

    // ── Viewport ────────────────────────────────────────────────────────

    pub fn attach_viewport(&mut self, viewport: V) {
        self.navigator.attach(viewport);
    }

    pub fn detach_viewport(&mut self) {
        self.navigator.detach();
    }

    pub fn viewport(&self) -> Option<&V> {
        self.navigator.viewport()
    }

    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        self.navigator.viewport_mut()
    }

    /// Apply pending viewport `select` notifications.
    pub fn sync_viewport(&mut self) -> bool {
        self.navigator.sync_from_viewport()
    }

    // ── Detail overlay ──────────────────────────────────────────────────

    /// Open the overlay on the current item. Returns `false` if there is no
    /// item at all (empty catalog).
    pub fn open_detail(&mut self) -> bool {
        match self.current_item() {
            (Some(item), _) => {
                self.overlay.open(item);
                true
            }
            (None, _) => false,
        }
    }

    pub fn open_item(&mut self, item: Arc<Item>) {
        self.overlay.open(item);
    }

    pub fn close_detail(&mut self) {
        self.overlay.close();
    }

    pub fn zoom_in(&mut self) {
        self.overlay.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.overlay.zoom_out();
    }

    pub fn zoom_reset(&mut self) {
        self.overlay.zoom_reset();
    }

    // ── Rendering boundary ──────────────────────────────────────────────

    pub fn snapshot(&self) -> GallerySnapshot {
        let (current_item, current_is_fallback) = self.current_item();
        let letters = self
            .letters
            .iter()
            .map(|&(letter, available)| LetterChip {
                letter,
                available,
                active: self.filters.letter_filter == Some(letter),
            })
            .collect();

        GallerySnapshot {
            projection: self.projection.clone(),
            current_item,
            current_is_fallback,
            current_index: self.navigator.current_index(),
            projection_len: self.projection.len(),
            stats: self.catalog.stats().clone(),
            overlay: self.overlay.state().cloned(),
            filters: self.filters.clone(),
            letters,
            years: self.years.clone(),
        }
    }
}
