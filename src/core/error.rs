//! Error types for catalog loading.
//!
//! The browsing engine itself is infallible; only reading and validating
//! a catalog source can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON is malformed or has the wrong shape.
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two items share the same identifier.
    #[error("Duplicate item id: {0}")]
    DuplicateId(String),

    /// An item's year is not a 4-digit numeral.
    #[error("Item {id} has invalid year {year:?} (expected 4 digits)")]
    InvalidYear { id: String, year: String },

    /// A required text field is empty.
    #[error("Item {id} is missing {field}")]
    MissingField { id: String, field: &'static str },
}
