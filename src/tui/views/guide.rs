//! Right-hand guide panel: search, sort, letter and year filters, catalog
//! stats and a thumbnail rail over the current projection.
//!
//! Each section is a focus target. Keys a section does not handle fall
//! through to the global bindings, so ←/→ keep stepping the carousel while
//! typing a search.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::core::engine::GallerySnapshot;
use crate::core::projection::ALPHABET;
use crate::tui::events::{Action, Focus};
use crate::tui::layout::GuideVisibility;
use crate::tui::theme;
use crate::tui::widgets::input_buffer::InputBuffer;

/// Outcome of routing a key to the guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideResult {
    /// Handled internally (cursor moved, nothing to dispatch).
    Consumed,
    /// Dispatch this action.
    Action(Action),
    /// Not handled; fall through to global bindings.
    Ignored,
}

/// Keys that keep acting while held down. Toggles and confirmations fire once.
fn repeats_in(focus: Focus, code: KeyCode) -> bool {
    match focus {
        Focus::Search => !matches!(code, KeyCode::Enter | KeyCode::Esc),
        Focus::Letters => matches!(code, KeyCode::Up | KeyCode::Down),
        Focus::Years | Focus::Rail => matches!(
            code,
            KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k')
        ),
        Focus::Gallery => false,
    }
}

pub struct GuideState {
    pub search: InputBuffer,
    letter_cursor: usize,
    /// 0 is the "All" chip; `n` is `years[n - 1]`.
    year_cursor: usize,
    rail_cursor: usize,
    /// Collapsed with `g`.
    pub user_collapsed: bool,
}

impl GuideState {
    pub fn new(show_guide: bool) -> Self {
        Self {
            search: InputBuffer::new(),
            letter_cursor: 0,
            year_cursor: 0,
            rail_cursor: 0,
            user_collapsed: !show_guide,
        }
    }

    pub fn letter_cursor(&self) -> usize {
        self.letter_cursor
    }

    pub fn year_cursor(&self) -> usize {
        self.year_cursor
    }

    pub fn rail_cursor(&self) -> usize {
        self.rail_cursor
    }

    /// Park the rail cursor on the item being shown.
    pub fn follow_current(&mut self, current_index: usize) {
        self.rail_cursor = current_index;
    }

    // ── Input ───────────────────────────────────────────────────────────

    pub fn handle_input(
        &mut self,
        event: &Event,
        focus: Focus,
        snapshot: &GallerySnapshot,
    ) -> GuideResult {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: kind @ (KeyEventKind::Press | KeyEventKind::Repeat),
            ..
        }) = event
        else {
            return GuideResult::Ignored;
        };

        if *kind == KeyEventKind::Repeat && !repeats_in(focus, *code) {
            return GuideResult::Ignored;
        }

        if *code == KeyCode::Esc {
            return GuideResult::Action(Action::FocusGallery);
        }

        match focus {
            Focus::Gallery => GuideResult::Ignored,
            Focus::Search => self.handle_search(*code, *modifiers),
            Focus::Letters => self.handle_letters(*code, *modifiers),
            Focus::Years => self.handle_years(*code, snapshot),
            Focus::Rail => self.handle_rail(*code, snapshot),
        }
    }

    fn handle_search(&mut self, code: KeyCode, modifiers: KeyModifiers) -> GuideResult {
        let changed = match (modifiers, code) {
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => self.search.clear(),
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => self.search.delete_word(),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.search.insert_char(c);
                true
            }
            (_, KeyCode::Backspace) => self.search.backspace(),
            (_, KeyCode::Enter) => return GuideResult::Action(Action::FocusGallery),
            _ => return GuideResult::Ignored,
        };
        if changed {
            GuideResult::Action(Action::SearchChanged(self.search.text().to_string()))
        } else {
            GuideResult::Consumed
        }
    }

    fn handle_letters(&mut self, code: KeyCode, modifiers: KeyModifiers) -> GuideResult {
        let n = ALPHABET.len();
        match (modifiers, code) {
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c))
                if c.is_ascii_alphabetic() =>
            {
                let letter = c.to_ascii_uppercase();
                if let Some(pos) = ALPHABET.iter().position(|&l| l == letter) {
                    self.letter_cursor = pos;
                }
                GuideResult::Action(Action::ToggleLetter(letter))
            }
            (_, KeyCode::Up) => {
                self.letter_cursor = (self.letter_cursor + n - 1) % n;
                GuideResult::Consumed
            }
            (_, KeyCode::Down) => {
                self.letter_cursor = (self.letter_cursor + 1) % n;
                GuideResult::Consumed
            }
            (_, KeyCode::Enter | KeyCode::Char(' ')) => {
                GuideResult::Action(Action::ToggleLetter(ALPHABET[self.letter_cursor]))
            }
            _ => GuideResult::Ignored,
        }
    }

    fn handle_years(&mut self, code: KeyCode, snapshot: &GallerySnapshot) -> GuideResult {
        let chips = snapshot.years.len() + 1;
        self.year_cursor = self.year_cursor.min(chips - 1);
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.year_cursor = self.year_cursor.saturating_sub(1);
                GuideResult::Consumed
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.year_cursor = (self.year_cursor + 1).min(chips - 1);
                GuideResult::Consumed
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.year_cursor {
                0 => GuideResult::Action(Action::ClearYearFilter),
                n => GuideResult::Action(Action::ToggleYear(snapshot.years[n - 1].clone())),
            },
            _ => GuideResult::Ignored,
        }
    }

    fn handle_rail(&mut self, code: KeyCode, snapshot: &GallerySnapshot) -> GuideResult {
        let len = snapshot.projection.len();
        if len == 0 {
            self.rail_cursor = 0;
            return match code {
                KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') => {
                    GuideResult::Consumed
                }
                _ => GuideResult::Ignored,
            };
        }
        self.rail_cursor = self.rail_cursor.min(len - 1);
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.rail_cursor = self.rail_cursor.saturating_sub(1);
                GuideResult::Consumed
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.rail_cursor = (self.rail_cursor + 1).min(len - 1);
                GuideResult::Consumed
            }
            KeyCode::Home => {
                self.rail_cursor = 0;
                GuideResult::Consumed
            }
            KeyCode::End => {
                self.rail_cursor = len - 1;
                GuideResult::Consumed
            }
            KeyCode::Enter | KeyCode::Char(' ') => GuideResult::Action(Action::SelectItem(
                snapshot.projection[self.rail_cursor].id.clone(),
            )),
            _ => GuideResult::Ignored,
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        snapshot: &GallerySnapshot,
        focus: Focus,
        visibility: GuideVisibility,
    ) {
        if visibility == GuideVisibility::Collapsed {
            let border = if focus.in_guide() {
                theme::border_focused()
            } else {
                theme::border_default()
            };
            let block = Block::default().borders(Borders::ALL).border_style(border);
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(Paragraph::new(Span::styled("«", theme::muted())), inner);
            return;
        }

        let block = theme::block("Guide", focus.in_guide());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(4), // Search & sort
            Constraint::Length(5), // Letters
            Constraint::Length(5), // Years
            Constraint::Length(4), // Stats
            Constraint::Min(3),    // Rail
        ])
        .split(inner);

        self.render_search(frame, chunks[0], snapshot, focus == Focus::Search);
        self.render_letters(frame, chunks[1], snapshot, focus == Focus::Letters);
        self.render_years(frame, chunks[2], snapshot, focus == Focus::Years);
        render_stats(frame, chunks[3], snapshot);
        self.render_rail(frame, chunks[4], snapshot, focus == Focus::Rail);
    }

    fn render_search(&self, frame: &mut Frame, area: Rect, snap: &GallerySnapshot, focused: bool) {
        let text = self.search.text();
        let query = if text.is_empty() {
            Span::styled("Search title or artist…", theme::dim())
        } else {
            Span::styled(text, Style::default().fg(theme::TEXT))
        };
        let lines = vec![
            section_header("Search & Sort", focused),
            Line::from(vec![Span::styled("/ ", theme::muted()), query]),
            Line::from(vec![
                Span::styled("Sort: ", theme::muted()),
                Span::styled(
                    snap.filters.sort_mode.label(),
                    Style::default().fg(theme::PRIMARY_LIGHT),
                ),
                Span::styled("  (o/O)", theme::key_hint()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);

        if focused && area.height > 1 {
            let x = area.x + 2 + self.search.cursor_position() as u16;
            frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y + 1));
        }
    }

    fn render_letters(&self, frame: &mut Frame, area: Rect, snap: &GallerySnapshot, focused: bool) {
        let chips: Vec<Span> = snap
            .letters
            .iter()
            .enumerate()
            .flat_map(|(i, chip)| {
                let mut style = if chip.active {
                    theme::chip_active(theme::ACCENT)
                } else if chip.available {
                    Style::default().fg(theme::TEXT)
                } else {
                    theme::dim()
                };
                if focused && i == self.letter_cursor {
                    style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
                }
                [
                    Span::styled(format!("{}", chip.letter), style),
                    Span::raw(" "),
                ]
            })
            .collect();

        let header = section_header("Alphabetical", focused);
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);
        frame.render_widget(Paragraph::new(header), rows[0]);
        frame.render_widget(
            Paragraph::new(Line::from(chips)).wrap(Wrap { trim: false }),
            rows[1],
        );
    }

    fn render_years(&self, frame: &mut Frame, area: Rect, snap: &GallerySnapshot, focused: bool) {
        let active = snap.filters.year_filter.as_deref();
        let labels = std::iter::once("All").chain(snap.years.iter().map(String::as_str));

        let chips: Vec<Span> = labels
            .enumerate()
            .flat_map(|(i, label)| {
                let is_active = match (i, active) {
                    (0, None) => true,
                    (0, Some(_)) => false,
                    (_, Some(year)) => year == label,
                    (_, None) => false,
                };
                let mut style = if is_active {
                    theme::chip_active(theme::SKY)
                } else {
                    Style::default().fg(theme::TEXT_MUTED)
                };
                if focused && i == self.year_cursor {
                    style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
                }
                [Span::styled(label.to_string(), style), Span::raw(" ")]
            })
            .collect();

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);
        frame.render_widget(Paragraph::new(section_header("Year", focused)), rows[0]);
        frame.render_widget(
            Paragraph::new(Line::from(chips)).wrap(Wrap { trim: false }),
            rows[1],
        );
    }

    fn render_rail(&self, frame: &mut Frame, area: Rect, snap: &GallerySnapshot, focused: bool) {
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);
        frame.render_widget(
            Paragraph::new(section_header("Collection", focused)),
            rows[0],
        );

        if snap.projection.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("Nothing matches", theme::dim())),
                rows[1],
            );
            return;
        }

        let items: Vec<ListItem> = snap
            .projection
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let is_current = i == snap.current_index;
                let marker = if is_current { "▶ " } else { "  " };
                let title_style = if is_current {
                    theme::highlight()
                } else {
                    Style::default().fg(theme::TEXT)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme::ACCENT)),
                    Span::styled(item.title.as_str(), title_style),
                    Span::styled(format!(" {}", item.year), theme::dim()),
                ]))
            })
            .collect();

        let selected = if focused {
            self.rail_cursor.min(snap.projection.len() - 1)
        } else {
            snap.current_index
        };
        let mut state = ListState::default().with_selected(Some(selected));
        let highlight = if focused {
            Style::default()
                .bg(theme::BG_SURFACE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let list = List::new(items).highlight_style(highlight);
        frame.render_stateful_widget(list, rows[1], &mut state);
    }
}

fn render_stats(frame: &mut Frame, area: Rect, snap: &GallerySnapshot) {
    let stat = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<14}"), theme::muted()),
            Span::styled(value, Style::default().fg(theme::PRIMARY_LIGHT)),
        ])
    };
    let lines = vec![
        section_header("Stats", false),
        stat("Artworks", snap.stats.total_count.to_string()),
        stat("Artists", snap.stats.distinct_creator_count.to_string()),
        stat("Years", snap.stats.range_label()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn section_header(title: &'static str, focused: bool) -> Line<'static> {
    let style = if focused {
        theme::highlight()
    } else {
        theme::heading()
    };
    Line::from(Span::styled(title, style))
}
