//! Detail overlay for a single artwork.
//!
//! Opened with `Enter`/`d` from the gallery. While open it consumes all
//! input: only zoom and close keys do anything.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::core::overlay::OpenOverlay;
use crate::tui::events::Action;
use crate::tui::theme;

/// Share of the image stage covered by the artwork at 100% zoom.
const BASE_WIDTH_RATIO: f32 = 0.4;
const BASE_HEIGHT_RATIO: f32 = 0.5;

/// Map modal input to an action. All other keys are swallowed.
pub fn map_input(event: &Event) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    match (*modifiers, *code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (_, KeyCode::Char('+') | KeyCode::Char('=')) => Some(Action::ZoomIn),
        (_, KeyCode::Char('-') | KeyCode::Char('_')) => Some(Action::ZoomOut),
        (_, KeyCode::Char('0')) => Some(Action::ZoomReset),
        (_, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('d')) => {
            Some(Action::CloseDetail)
        }
        _ => None,
    }
}

/// Artwork frame size inside `stage` for the given zoom factor.
pub fn zoomed_frame(stage: Rect, zoom: f32) -> Rect {
    let width = ((stage.width as f32) * BASE_WIDTH_RATIO * zoom).round() as u16;
    let height = ((stage.height as f32) * BASE_HEIGHT_RATIO * zoom).round() as u16;
    let width = width.clamp(3.min(stage.width), stage.width);
    let height = height.clamp(3.min(stage.height), stage.height);
    Rect::new(
        stage.x + (stage.width - width) / 2,
        stage.y + (stage.height - height) / 2,
        width,
        height,
    )
}

pub fn render(frame: &mut Frame, area: Rect, overlay: &OpenOverlay) {
    let modal = centered_modal(80, 85, area);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title(format!(" {} ", overlay.item.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .style(Style::default().bg(theme::BG_BASE));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let chunks = Layout::vertical([
        Constraint::Min(6),    // Image stage
        Constraint::Length(6), // Info
        Constraint::Length(1), // Hint line
    ])
    .split(inner);

    render_stage(frame, chunks[0], overlay);
    render_info(frame, chunks[1], overlay);
    render_hint(frame, chunks[2], overlay);
}

fn render_stage(frame: &mut Frame, stage: Rect, overlay: &OpenOverlay) {
    let art = zoomed_frame(stage, overlay.zoom());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::PRIMARY))
        .style(Style::default().bg(theme::BG_SURFACE));
    let inner = block.inner(art);
    frame.render_widget(block, art);

    let lines = vec![
        Line::from(Span::styled("▣", Style::default().fg(theme::PRIMARY_LIGHT))),
        Line::from(Span::styled(overlay.item.image_ref.as_str(), theme::dim())),
    ];
    let top = inner.height.saturating_sub(lines.len() as u16) / 2;
    let text_area = Rect::new(inner.x, inner.y + top, inner.width, inner.height - top);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_area,
    );
}

fn render_info(frame: &mut Frame, area: Rect, overlay: &OpenOverlay) {
    let item = &overlay.item;
    let lines = vec![
        Line::from(vec![
            Span::styled(item.creator.as_str(), Style::default().fg(theme::PRIMARY_LIGHT)),
            Span::styled(" • ", theme::dim()),
            Span::styled(item.year.as_str(), Style::default().fg(theme::SKY)),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            item.description.as_str(),
            Style::default().fg(theme::TEXT),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_hint(frame: &mut Frame, area: Rect, overlay: &OpenOverlay) {
    let key = Style::default()
        .fg(theme::PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled("-", key),
        Span::raw(" "),
        Span::styled(
            overlay.zoom_label(),
            Style::default().fg(theme::SKY).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled("+", key),
        Span::styled("  │  ", theme::dim()),
        Span::styled("0", key),
        Span::styled(":reset  ", theme::muted()),
        Span::styled("Esc", key),
        Span::styled(":close", theme::muted()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Centered modal rect using percentage of parent area.
fn centered_modal(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vert = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vert[1])[1]
}
