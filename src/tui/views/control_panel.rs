//! Left control panel: what is on screen and what you can do about it.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::core::engine::GallerySnapshot;
use crate::tui::theme;
use crate::tui::widgets::carousel::snippet;

/// Description characters shown under "Now Viewing".
const PANEL_SNIPPET_CHARS: usize = 160;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &GallerySnapshot) {
    let block = theme::block_default("Virtual Gallery");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(2),  // Brand
        Constraint::Min(6),     // Now viewing
        Constraint::Length(5),  // Navigation
        Constraint::Length(4),  // Actions
    ])
    .split(inner);

    render_brand(frame, chunks[0]);
    render_now_viewing(frame, chunks[1], snapshot);
    render_navigation(frame, chunks[2]);
    render_actions(frame, chunks[3]);
}

fn render_brand(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Art Collection", theme::title())),
        Line::from(Span::styled("Masterpieces through the ages", theme::muted())),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_now_viewing(frame: &mut Frame, area: Rect, snapshot: &GallerySnapshot) {
    let mut lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled("Now Viewing  ", theme::heading()),
            Span::styled(
                snapshot.position_label(),
                Style::default().fg(theme::SKY).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    match snapshot.current_item {
        Some(ref item) => {
            lines.push(Line::from(Span::styled(
                item.title.as_str(),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                Span::styled(item.creator.as_str(), Style::default().fg(theme::PRIMARY_LIGHT)),
                Span::styled(" • ", theme::dim()),
                Span::styled(item.year.as_str(), Style::default().fg(theme::SKY)),
            ]));
            if snapshot.current_is_fallback {
                lines.push(Line::from(Span::styled(
                    "No matches; showing the first artwork",
                    Style::default().fg(theme::WARNING),
                )));
            }
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                snippet(&item.description, PANEL_SNIPPET_CHARS),
                theme::muted(),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled("The catalog is empty", theme::dim())));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_navigation(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Navigation", theme::heading())),
        hint_line("← / [", "Previous"),
        hint_line("→ / ]", "Next"),
        hint_line("Tab", "Search & filters"),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_actions(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Actions", theme::heading())),
        hint_line("s", "Surprise me"),
        hint_line("Enter", "View details"),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn hint_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {key:<7}"),
            Style::default()
                .fg(theme::PRIMARY_LIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc, theme::muted()),
    ])
}
