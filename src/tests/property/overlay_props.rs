//! Property-based tests for the detail overlay zoom
//!
//! Tests invariants:
//! - Zoom stays within bounds for any key sequence
//! - Reset returns to the default

use std::sync::Arc;

use proptest::prelude::*;

use crate::core::overlay::{DetailOverlay, DEFAULT_ZOOM_PERCENT, MAX_ZOOM_PERCENT, MIN_ZOOM_PERCENT};
use crate::tests::common::artwork;

#[derive(Debug, Clone, Copy)]
enum ZoomKey {
    In,
    Out,
    Reset,
}

fn arb_keys() -> impl Strategy<Value = Vec<ZoomKey>> {
    prop::collection::vec(
        prop_oneof![3 => Just(ZoomKey::In), 3 => Just(ZoomKey::Out), 1 => Just(ZoomKey::Reset)],
        0..60,
    )
}

fn open_overlay() -> DetailOverlay {
    let mut overlay = DetailOverlay::new();
    overlay.open(Arc::new(artwork("k", "The Kiss", "Gustav Klimt", "1908")));
    overlay
}

proptest! {
    /// Property: zoom is always within 50%..=300%
    #[test]
    fn prop_zoom_stays_in_bounds(keys in arb_keys()) {
        let mut overlay = open_overlay();
        for key in keys {
            match key {
                ZoomKey::In => overlay.zoom_in(),
                ZoomKey::Out => overlay.zoom_out(),
                ZoomKey::Reset => overlay.zoom_reset(),
            }
            let zoom = overlay.state().unwrap().zoom_percent();
            prop_assert!((MIN_ZOOM_PERCENT..=MAX_ZOOM_PERCENT).contains(&zoom));
            let factor = overlay.state().unwrap().zoom();
            prop_assert!((0.5..=3.0).contains(&factor));
        }
    }

    /// Property: reset always lands on 100%, and reopening starts there too
    #[test]
    fn prop_reset_and_reopen_restore_default(keys in arb_keys()) {
        let mut overlay = open_overlay();
        for key in &keys {
            match key {
                ZoomKey::In => overlay.zoom_in(),
                _ => overlay.zoom_out(),
            }
        }
        overlay.zoom_reset();
        prop_assert_eq!(overlay.state().unwrap().zoom_percent(), DEFAULT_ZOOM_PERCENT);

        overlay.zoom_in();
        overlay.close();
        overlay.open(Arc::new(artwork("w", "Water Lilies", "Claude Monet", "1906")));
        prop_assert_eq!(overlay.state().unwrap().zoom_percent(), DEFAULT_ZOOM_PERCENT);
    }

    /// Property: zoom keys do nothing while closed
    #[test]
    fn prop_closed_overlay_ignores_zoom(keys in arb_keys()) {
        let mut overlay = DetailOverlay::new();
        for key in keys {
            match key {
                ZoomKey::In => overlay.zoom_in(),
                ZoomKey::Out => overlay.zoom_out(),
                ZoomKey::Reset => overlay.zoom_reset(),
            }
        }
        prop_assert!(!overlay.is_open());
        prop_assert!(overlay.state().is_none());
    }
}
