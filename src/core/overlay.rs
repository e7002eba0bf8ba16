//! Detail overlay: modal visibility plus a bounded zoom level.
//!
//! Independent of navigation. Zoom lives inside the open state, so closing
//! discards it and every open starts at 100%.

use std::sync::Arc;

use super::catalog::Item;

pub const MIN_ZOOM_PERCENT: u16 = 50;
pub const MAX_ZOOM_PERCENT: u16 = 300;
pub const DEFAULT_ZOOM_PERCENT: u16 = 100;
pub const ZOOM_STEP_PERCENT: u16 = 20;

/// An open detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenOverlay {
    pub item: Arc<Item>,
    zoom_percent: u16,
}

impl OpenOverlay {
    /// Zoom factor in `[0.5, 3.0]`.
    pub fn zoom(&self) -> f32 {
        f32::from(self.zoom_percent) / 100.0
    }

    pub fn zoom_percent(&self) -> u16 {
        self.zoom_percent
    }

    /// Display label, e.g. `"120%"`.
    pub fn zoom_label(&self) -> String {
        format!("{}%", self.zoom_percent)
    }
}

/// Detail overlay controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailOverlay {
    open: Option<OpenOverlay>,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `item`, zoom reset to 100%.
    pub fn open(&mut self, item: Arc<Item>) {
        tracing::debug!(item = %item.id, "Opening detail overlay");
        self.open = Some(OpenOverlay {
            item,
            zoom_percent: DEFAULT_ZOOM_PERCENT,
        });
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn state(&self) -> Option<&OpenOverlay> {
        self.open.as_ref()
    }

    pub fn zoom_in(&mut self) {
        if let Some(open) = self.open.as_mut() {
            open.zoom_percent = (open.zoom_percent + ZOOM_STEP_PERCENT).min(MAX_ZOOM_PERCENT);
        }
    }

    pub fn zoom_out(&mut self) {
        if let Some(open) = self.open.as_mut() {
            open.zoom_percent = open
                .zoom_percent
                .saturating_sub(ZOOM_STEP_PERCENT)
                .max(MIN_ZOOM_PERCENT);
        }
    }

    pub fn zoom_reset(&mut self) {
        if let Some(open) = self.open.as_mut() {
            open.zoom_percent = DEFAULT_ZOOM_PERCENT;
        }
    }
}
