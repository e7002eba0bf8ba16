//! Loading catalogs from disk and browsing them end to end.

use std::io::Write;

use rstest::rstest;
use tempfile::NamedTempFile;

use crate::core::catalog::Catalog;
use crate::core::engine::GalleryEngine;
use crate::core::error::CatalogError;
use crate::tui::widgets::carousel::CarouselState;

fn write_catalog(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_loaded_catalog_drives_engine() {
    let file = write_catalog(
        r#"[
            {"id": "1", "title": "Sunflowers", "artist": "Vincent van Gogh", "year": "1888", "desc": "Vase", "src": "a.jpg"},
            {"id": "2", "title": "Irises", "creator": "Vincent van Gogh", "year": "1889", "description": "Garden", "imageRef": "b.jpg"},
            {"id": "3", "title": "Olympia", "creator": "Edouard Manet", "year": "1863", "description": "Portrait", "imageRef": "c.jpg"}
        ]"#,
    );
    let catalog = Catalog::load(file.path()).unwrap();
    let engine: GalleryEngine<CarouselState> = GalleryEngine::new(catalog.into());

    let snap = engine.snapshot();
    assert_eq!(snap.stats.total_count, 3);
    assert_eq!(snap.stats.distinct_creator_count, 2);
    assert_eq!(snap.stats.range_label(), "1863-1889");
    assert_eq!(snap.years, ["1889", "1888", "1863"]);
    let available: String = snap
        .letters
        .iter()
        .filter(|chip| chip.available)
        .map(|chip| chip.letter)
        .collect();
    assert_eq!(available, "IOS");
}

#[rstest]
#[case::not_an_array(r#"{"id": "1"}"#)]
#[case::missing_title(r#"[{"id": "1", "creator": "X", "year": "1900", "description": "", "imageRef": ""}]"#)]
#[case::truncated(r#"[{"id": "1","#)]
fn test_malformed_json_is_json_error(#[case] json: &str) {
    let file = write_catalog(json);
    assert!(matches!(Catalog::load(file.path()), Err(CatalogError::Json(_))));
}

#[rstest]
#[case::short_year("1", "99")]
#[case::word_year("1", "circa")]
fn test_bad_year_rejected(#[case] id: &str, #[case] year: &str) {
    let json = format!(
        r#"[{{"id": "{id}", "title": "T", "creator": "C", "year": "{year}", "description": "", "imageRef": ""}}]"#
    );
    let file = write_catalog(&json);
    assert!(matches!(
        Catalog::load(file.path()),
        Err(CatalogError::InvalidYear { .. })
    ));
}

#[test]
fn test_empty_catalog_file() {
    let file = write_catalog("[]");
    let catalog = Catalog::load(file.path()).unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.stats().range_label(), "N/A");
}
