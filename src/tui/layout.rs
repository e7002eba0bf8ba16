//! Root layout: control panel + carousel + guide panel + status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the left control panel.
pub const CONTROL_PANEL_WIDTH: u16 = 30;
/// Width of the expanded guide panel.
pub const GUIDE_EXPANDED_WIDTH: u16 = 38;
/// Width of the collapsed guide panel (title strip only).
pub const GUIDE_COLLAPSED_WIDTH: u16 = 3;
/// Hide the control panel below this terminal width.
pub const HIDE_CONTROL_PANEL_THRESHOLD: u16 = 100;
/// Auto-collapse the guide below this terminal width.
pub const AUTO_COLLAPSE_GUIDE_THRESHOLD: u16 = 70;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    /// Control panel (None when the terminal is narrow).
    pub control: Option<Rect>,
    /// Carousel area.
    pub carousel: Rect,
    /// Guide panel.
    pub guide: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

/// Guide visibility derived from terminal width and user preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideVisibility {
    Expanded,
    Collapsed,
}

impl AppLayout {
    /// Compute layout regions.
    ///
    /// `user_collapsed`: the user has collapsed the guide with `g`.
    pub fn compute(area: Rect, user_collapsed: bool) -> (Self, GuideVisibility) {
        let visibility = if user_collapsed || area.width < AUTO_COLLAPSE_GUIDE_THRESHOLD {
            GuideVisibility::Collapsed
        } else {
            GuideVisibility::Expanded
        };
        let show_control = area.width >= HIDE_CONTROL_PANEL_THRESHOLD;

        let rows = Layout::vertical([
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        let guide_width = match visibility {
            GuideVisibility::Expanded => GUIDE_EXPANDED_WIDTH,
            GuideVisibility::Collapsed => GUIDE_COLLAPSED_WIDTH,
        };

        let (control, carousel, guide) = if show_control {
            let cols = Layout::horizontal([
                Constraint::Length(CONTROL_PANEL_WIDTH),
                Constraint::Min(1),
                Constraint::Length(guide_width),
            ])
            .split(rows[0]);
            (Some(cols[0]), cols[1], cols[2])
        } else {
            let cols = Layout::horizontal([Constraint::Min(1), Constraint::Length(guide_width)])
                .split(rows[0]);
            (None, cols[0], cols[1])
        };

        (
            AppLayout {
                control,
                carousel,
                guide,
                status: rows[1],
            },
            visibility,
        )
    }
}
