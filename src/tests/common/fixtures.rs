//! Test Fixtures
//!
//! Small hand-made catalogs and engines wired to either the real carousel
//! or nothing at all.

use std::sync::Arc;

use crate::core::catalog::{Catalog, Item};
use crate::core::engine::GalleryEngine;
use crate::tui::widgets::carousel::CarouselState;

// =============================================================================
// Item Fixtures
// =============================================================================

/// Build an artwork with a derived description and image reference.
pub fn artwork(id: &str, title: &str, creator: &str, year: &str) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        creator: creator.to_string(),
        year: year.to_string(),
        description: format!("{title} by {creator}"),
        image_ref: format!("images/{id}.jpg"),
    }
}

// =============================================================================
// Catalog Fixtures
// =============================================================================

/// Wrap items into a validated catalog.
pub fn catalog_of(items: Vec<Item>) -> Arc<Catalog> {
    Arc::new(Catalog::new(items).expect("fixture catalog should validate"))
}

/// The five-artwork catalog used throughout the browsing scenarios.
pub fn five_item_catalog() -> Arc<Catalog> {
    catalog_of(vec![
        artwork("a", "Mona Lisa", "Leonardo da Vinci", "1503"),
        artwork("b", "The Starry Night", "Vincent van Gogh", "1889"),
        artwork("c", "The Persistence of Memory", "Salvador Dali", "1931"),
        artwork("d", "Empire State", "Unknown", "1931"),
        artwork("e", "Girl with Balloon", "Banksy", "2001"),
    ])
}

/// Catalog with no items at all.
pub fn empty_catalog() -> Arc<Catalog> {
    catalog_of(Vec::new())
}

// =============================================================================
// Engine Fixtures
// =============================================================================

/// Engine over `catalog` with a carousel attached and a fixed RNG seed.
pub fn carousel_engine(catalog: Arc<Catalog>) -> GalleryEngine<CarouselState> {
    let mut engine = GalleryEngine::new(catalog).with_rng_seed(42);
    engine.attach_viewport(CarouselState::new());
    engine
}

/// Ids of the current projection, in order.
pub fn projection_ids(engine: &GalleryEngine<CarouselState>) -> Vec<String> {
    engine.projection().iter().map(|item| item.id.clone()).collect()
}
