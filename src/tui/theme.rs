//! Centralized purple & pink gallery theme for the Galleria TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

// ── Primary palette ─────────────────────────────────────────────────────────

/// Purple: primary accent, active card, focused borders.
pub const PRIMARY: Color = Color::Rgb(0xA8, 0x55, 0xF7);
/// Lavender: highlights, hints, secondary focus.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0xD8, 0xB4, 0xFE);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Pink: calls to action, active letter chip.
pub const ACCENT: Color = Color::Rgb(0xFF, 0x6B, 0x9D);
/// Sky: year chips, zoom readout.
pub const SKY: Color = Color::Rgb(0x38, 0xBD, 0xF8);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Near-black violet: base background.
pub const BG_BASE: Color = Color::Rgb(0x0A, 0x01, 0x18);
/// Surface: elevated panels.
pub const BG_SURFACE: Color = Color::Rgb(0x16, 0x0A, 0x2A);

// ── Text ────────────────────────────────────────────────────────────────────

/// Primary text.
pub const TEXT: Color = Color::Rgb(0xF0, 0xEC, 0xF8);
/// Muted text: secondary labels, borders.
pub const TEXT_MUTED: Color = Color::Rgb(0x9C, 0x8F, 0xB5);
/// Dim text: unavailable chips, faint hints.
pub const TEXT_DIM: Color = Color::Rgb(0x4E, 0x45, 0x60);

// ── Semantic ────────────────────────────────────────────────────────────────

pub const ERROR: Color = Color::Rgb(0xF8, 0x71, 0x71);
pub const SUCCESS: Color = Color::Rgb(0x4A, 0xDE, 0x80);
pub const WARNING: Color = Color::Rgb(0xFB, 0xBF, 0x24);
pub const INFO: Color = Color::Rgb(0x81, 0x8C, 0xF8);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Accent bold text (titles, active items).
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Section header style.
pub fn heading() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Focused border style.
pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

/// Unfocused border style.
pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Muted label text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Dim text for disabled/faint items.
pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Active chip (letter or year filter).
pub fn chip_active(color: Color) -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(color)
        .add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block with focused styling.
pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_focused())
}

/// A bordered block with default (unfocused) styling.
pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_default())
}

/// Focused or default block depending on `focused`.
pub fn block(title: &str, focused: bool) -> Block<'_> {
    if focused {
        block_focused(title)
    } else {
        block_default(title)
    }
}
