//! Looping card carousel: the terminal implementation of [`Viewport`].
//!
//! The carousel owns its own selected slide. Programmatic scrolls come from
//! the gallery engine; user drags (mouse wheel) move the selection directly
//! and announce it through `select` notices, which the engine picks up on
//! its next sync.

use std::sync::Arc;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tokio::sync::mpsc;

use crate::core::catalog::Item;
use crate::core::viewport::{SelectNotice, SubscriptionId, Viewport};
use crate::tui::theme;

/// Characters of description shown on a card.
pub const CARD_SNIPPET_CHARS: usize = 120;
/// Fraction of the remaining distance covered per animation tick.
const EASING: f32 = 0.5;
/// Distance below which the animation snaps to the target.
const SETTLE_EPSILON: f32 = 0.05;
/// Maximum number of position dots drawn under the cards.
const MAX_DOTS: usize = 24;

/// Truncate `text` to `max_chars`, appending an ellipsis when cut.
pub fn snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

/// Carousel position, animation and `select` listeners.
pub struct CarouselState {
    slide_count: usize,
    selected: usize,
    /// Animated position on the slide ring, eased toward `selected`.
    offset: f32,
    listeners: Vec<(SubscriptionId, mpsc::UnboundedSender<SelectNotice>)>,
    next_subscription: SubscriptionId,
}

impl CarouselState {
    pub fn new() -> Self {
        Self {
            slide_count: 0,
            selected: 0,
            offset: 0.0,
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// User drag to the next slide (loops).
    pub fn scroll_next(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.select((self.selected + 1) % self.slide_count);
    }

    /// User drag to the previous slide (loops).
    pub fn scroll_prev(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.select((self.selected + self.slide_count - 1) % self.slide_count);
    }

    /// Advance the scroll animation by one tick.
    pub fn tick(&mut self) {
        if self.slide_count == 0 {
            self.offset = 0.0;
            return;
        }
        let n = self.slide_count as f32;
        let mut delta = self.selected as f32 - self.offset;
        // Take the short way around the ring.
        if delta > n / 2.0 {
            delta -= n;
        } else if delta < -n / 2.0 {
            delta += n;
        }
        if delta.abs() < SETTLE_EPSILON {
            self.offset = self.selected as f32;
        } else {
            self.offset = (self.offset + delta * EASING).rem_euclid(n);
        }
    }

    pub fn is_settled(&self) -> bool {
        self.offset == self.selected as f32
    }

    /// Slide currently drawn in the center (follows the animation).
    pub fn visible_slide(&self) -> usize {
        if self.slide_count == 0 {
            return 0;
        }
        (self.offset.round() as usize) % self.slide_count
    }

    fn select(&mut self, position: usize) {
        if position == self.selected {
            return;
        }
        self.selected = position;
        self.emit_select();
    }

    fn emit_select(&mut self) {
        self.listeners
            .retain(|(_, listener)| listener.send(SelectNotice).is_ok());
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect, slides: &[Arc<Item>], focused: bool) {
        let block = theme::block("Gallery", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if slides.is_empty() || self.slide_count == 0 {
            render_empty(frame, inner);
            return;
        }

        let rows = Layout::vertical([Constraint::Min(6), Constraint::Length(1)]).split(inner);
        let center = self.visible_slide().min(slides.len() - 1);

        if slides.len() == 1 {
            let cols = Layout::horizontal([
                Constraint::Percentage(20),
                Constraint::Percentage(60),
                Constraint::Percentage(20),
            ])
            .split(rows[0]);
            render_card(frame, cols[1], &slides[center], center, true);
        } else {
            let cols = Layout::horizontal([
                Constraint::Percentage(22),
                Constraint::Percentage(56),
                Constraint::Percentage(22),
            ])
            .split(rows[0]);
            let len = slides.len();
            let prev = (center + len - 1) % len;
            let next = (center + 1) % len;
            render_card(frame, cols[0], &slides[prev], prev, false);
            render_card(frame, cols[1], &slides[center], center, true);
            render_card(frame, cols[2], &slides[next], next, false);
        }

        render_dots(frame, rows[1], slides.len(), self.selected);
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport for CarouselState {
    fn scroll_to(&mut self, position: usize) {
        if position >= self.slide_count {
            log::debug!(
                "Carousel ignoring scroll to {position} (only {} slides)",
                self.slide_count
            );
            return;
        }
        self.select(position);
    }

    fn selected_scroll_snap(&self) -> usize {
        self.selected
    }

    fn set_slide_count(&mut self, count: usize) {
        self.slide_count = count;
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
        self.offset = self.selected as f32;
    }

    fn on_select(&mut self, listener: mpsc::UnboundedSender<SelectNotice>) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    fn off_select(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(sub, _)| *sub != id);
    }
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled("No artworks found", theme::title())),
        Line::raw(""),
        Line::from(Span::styled(
            "Adjust the search text or clear a filter.",
            theme::muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_card(frame: &mut Frame, area: Rect, item: &Item, index: usize, active: bool) {
    let border = if active {
        Style::default().fg(theme::ACCENT)
    } else {
        theme::border_default()
    };
    let title_style = if active {
        theme::title()
    } else {
        Style::default().fg(theme::TEXT_MUTED)
    };

    let block = Block::default()
        .title(Span::styled(format!(" #{} ", index + 1), theme::muted()))
        .title_alignment(Alignment::Right)
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Percentage(45), Constraint::Min(3)]).split(inner);

    // Image placeholder
    let frame_style = if active {
        Style::default().fg(theme::PRIMARY)
    } else {
        theme::dim()
    };
    let placeholder = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled("▣", frame_style)),
        Line::from(Span::styled(item.image_ref.as_str(), theme::dim())),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(frame_style));
    frame.render_widget(placeholder, rows[0]);

    let mut lines = vec![
        Line::from(Span::styled(item.title.as_str(), title_style)),
        Line::from(vec![
            Span::styled(item.creator.as_str(), Style::default().fg(theme::PRIMARY_LIGHT)),
            Span::styled(" • ", theme::dim()),
            Span::styled(item.year.as_str(), Style::default().fg(theme::SKY)),
        ]),
    ];
    if active {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            snippet(&item.description, CARD_SNIPPET_CHARS),
            Style::default().fg(theme::TEXT),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[1],
    );
}

fn render_dots(frame: &mut Frame, area: Rect, len: usize, selected: usize) {
    if len > MAX_DOTS {
        let label = Line::from(Span::styled(
            format!("{} of {len}", selected + 1),
            theme::muted(),
        ));
        frame.render_widget(Paragraph::new(label).alignment(Alignment::Center), area);
        return;
    }
    let spans: Vec<Span> = (0..len)
        .map(|i| {
            if i == selected {
                Span::styled("● ", Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD))
            } else {
                Span::styled("○ ", theme::dim())
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
