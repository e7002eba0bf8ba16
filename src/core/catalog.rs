//! Catalog source: the ordered, immutable list of artworks.
//!
//! A catalog is loaded once at startup (bundled JSON or a user file),
//! validated, and shared behind an `Arc` as read-only state. Nothing
//! mutates it afterwards; everything else derives from it.

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use super::error::{CatalogError, Result};
use super::stats::Stats;

/// Catalog shipped with the binary.
const BUNDLED_CATALOG: &str = include_str!("../../data/artworks.json");

/// A single browsable artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(alias = "artist")]
    pub creator: String,
    /// Four-digit year, kept as text.
    pub year: String,
    #[serde(alias = "desc")]
    pub description: String,
    #[serde(alias = "src")]
    pub image_ref: String,
}

impl Item {
    /// Numeric value of the year, for ordering and ranges.
    pub fn year_number(&self) -> Option<u32> {
        self.year.parse().ok()
    }

    /// Whether the upper-cased title starts with `letter`.
    pub fn title_starts_with(&self, letter: char) -> bool {
        self.title.to_uppercase().starts_with(letter)
    }
}

/// Validated, immutable catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Arc<Item>>,
    stats: OnceLock<Stats>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids, malformed years and
    /// blank titles or creators.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            if item.title.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    id: item.id.clone(),
                    field: "title",
                });
            }
            if item.creator.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    id: item.id.clone(),
                    field: "creator",
                });
            }
            if item.year.len() != 4 || !item.year.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CatalogError::InvalidYear {
                    id: item.id.clone(),
                    year: item.year.clone(),
                });
            }
        }

        Ok(Self {
            items: items.into_iter().map(Arc::new).collect(),
            stats: OnceLock::new(),
        })
    }

    /// Parse a JSON array of items.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&contents)?;
        log::info!(
            "Loaded {} items from catalog {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The catalog bundled with the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    pub fn items(&self) -> &[Arc<Item>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&Arc<Item>> {
        self.items.first()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&Arc<Item>> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Aggregate statistics, computed on first use.
    pub fn stats(&self) -> &Stats {
        self.stats.get_or_init(|| Stats::compute(&self.items))
    }
}
