//! Aggregate statistics over the raw catalog.

use std::collections::HashSet;
use std::sync::Arc;

use super::catalog::Item;

/// Catalog-wide figures shown in the guide panel.
///
/// Always derived from the full catalog, never from the current projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total_count: usize,
    pub distinct_creator_count: usize,
    /// `(min, max)` year, `None` for an empty catalog.
    pub year_range: Option<(String, String)>,
}

impl Stats {
    pub fn compute(items: &[Arc<Item>]) -> Self {
        let creators: HashSet<&str> = items.iter().map(|item| item.creator.as_str()).collect();

        let min = items
            .iter()
            .filter_map(|item| item.year_number().map(|n| (n, &item.year)))
            .min_by_key(|(n, _)| *n);
        let max = items
            .iter()
            .filter_map(|item| item.year_number().map(|n| (n, &item.year)))
            .max_by_key(|(n, _)| *n);

        let year_range = match (min, max) {
            (Some((_, lo)), Some((_, hi))) => Some((lo.clone(), hi.clone())),
            _ => None,
        };

        Self {
            total_count: items.len(),
            distinct_creator_count: creators.len(),
            year_range,
        }
    }

    /// Year range as `"min-max"`, or `"N/A"`.
    pub fn range_label(&self) -> String {
        match &self.year_range {
            Some((lo, hi)) => format!("{lo}-{hi}"),
            None => "N/A".to_string(),
        }
    }
}
