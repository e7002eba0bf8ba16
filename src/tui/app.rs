use std::cell::Cell;
use std::io;
use std::time::Duration;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, Focus, Notification, NotificationLevel};
use super::layout::AppLayout;
use super::theme;
use super::views::control_panel;
use super::views::detail_modal;
use super::views::guide::{GuideResult, GuideState};
use super::widgets::carousel::CarouselState;
use crate::config::{TuiConfig, MIN_TICK_RATE_MS};
use crate::core::engine::{GalleryEngine, GallerySnapshot};
use crate::core::navigation::Direction;

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Which area receives panel-specific keys.
    pub focus: Focus,
    /// Browsing state. Owns the carousel as its viewport.
    pub engine: GalleryEngine<CarouselState>,
    /// Guide panel state (search text, chip cursors).
    pub guide: GuideState,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Monotonic counter for notification IDs.
    notification_counter: u64,
    /// Whether the help modal is open.
    pub show_help: bool,
    mouse_enabled: bool,
    /// Carousel area from the last frame, for mouse hit-testing.
    carousel_area: Cell<Rect>,
    /// Receiver for events pushed from outside the loop.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl AppState {
    pub fn new(
        mut engine: GalleryEngine<CarouselState>,
        config: &TuiConfig,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
    ) -> Self {
        engine.attach_viewport(CarouselState::new());
        Self {
            running: true,
            focus: Focus::Gallery,
            engine,
            guide: GuideState::new(config.show_guide),
            notifications: Vec::new(),
            notification_counter: 0,
            show_help: false,
            mouse_enabled: config.mouse_enabled,
            carousel_area: Cell::new(Rect::default()),
            event_rx,
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let min_tick = Duration::from_millis(MIN_TICK_RATE_MS);
        let mut tick_interval = tokio::time::interval(tick_rate.max(min_tick));
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        self.engine.detach_viewport();
        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => self.handle_input(crossterm_event),
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Notification(notification) => {
                self.push_notification(notification.message, notification.level);
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }

        // Pick up anything the carousel announced while handling the event.
        if self.engine.sync_viewport() && self.focus != Focus::Rail {
            self.guide.follow_current(self.engine.current_index());
        }
    }

    fn handle_input(&mut self, event: Event) {
        // Priority 1: Detail overlay consumes all input when open
        if self.engine.overlay().is_open() {
            if let Some(action) = detail_modal::map_input(&event) {
                self.handle_action(action);
            }
            return;
        }

        // Priority 2: Help modal
        if self.show_help {
            if let Some(action) = self.map_help_input(&event) {
                self.handle_action(action);
            }
            return;
        }

        // Priority 3: Mouse wheel over the carousel
        if let Event::Mouse(mouse) = event {
            self.handle_mouse(mouse);
            return;
        }

        // Priority 4: Focused guide section
        if self.focus.in_guide() {
            let snapshot = self.engine.snapshot();
            match self.guide.handle_input(&event, self.focus, &snapshot) {
                GuideResult::Consumed => return,
                GuideResult::Action(action) => {
                    self.handle_action(action);
                    return;
                }
                GuideResult::Ignored => {}
            }
        }

        // Priority 5: Global keybindings
        if let Some(action) = self.map_input_to_action(event) {
            self.handle_action(action);
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.mouse_enabled {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);
        if !self.carousel_area.get().contains(position) {
            return;
        }
        let Some(carousel) = self.engine.viewport_mut() else {
            return;
        };
        match mouse.kind {
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => carousel.scroll_next(),
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => carousel.scroll_prev(),
            _ => {}
        }
    }

    /// Map help modal input to action.
    fn map_help_input(&self, event: &Event) -> Option<Action> {
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
            (_, KeyCode::Esc | KeyCode::Char('?')) => Some(Action::CloseHelp),
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: kind @ (KeyEventKind::Press | KeyEventKind::Repeat),
            ..
        }) = event
        else {
            return None;
        };

        // Auto-repeat only steps; holding any other key fires once.
        if kind == KeyEventKind::Repeat
            && !matches!(
                code,
                KeyCode::Left | KeyCode::Right | KeyCode::Char('[') | KeyCode::Char(']')
            )
        {
            return None;
        }

        match (modifiers, code) {
            // Ctrl+C → quit
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, _) => match code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ShowHelp),
                KeyCode::Tab => Some(Action::FocusNext),
                KeyCode::BackTab => Some(Action::FocusPrev),
                KeyCode::Left | KeyCode::Char('[') => Some(Action::Step(Direction::Prev)),
                KeyCode::Right | KeyCode::Char(']') => Some(Action::Step(Direction::Next)),
                KeyCode::Char('s') => Some(Action::Shuffle),
                KeyCode::Enter | KeyCode::Char('d') => Some(Action::OpenDetail),
                KeyCode::Char('/') => Some(Action::FocusSearch),
                KeyCode::Char('o') => Some(Action::NextSort),
                KeyCode::Char('O') => Some(Action::PrevSort),
                KeyCode::Char('g') => Some(Action::ToggleGuide),
                KeyCode::Esc => Some(Action::FocusGallery),
                _ => None,
            },
            _ => None,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,

            // Navigation
            Action::Step(direction) => {
                self.engine.step(direction);
            }
            Action::Shuffle => {
                self.engine.shuffle();
            }
            Action::SelectItem(id) => {
                if !self.engine.select_item(&id) {
                    log::debug!("Rail selection {id} not in projection");
                }
            }

            // Filters
            Action::SearchChanged(text) => {
                self.engine.set_search_text(&text);
                self.on_projection_changed();
            }
            Action::NextSort => {
                self.engine.next_sort_mode();
                self.on_projection_changed();
            }
            Action::PrevSort => {
                self.engine.prev_sort_mode();
                self.on_projection_changed();
            }
            Action::ToggleLetter(letter) => {
                if self.engine.toggle_letter(letter) {
                    self.on_projection_changed();
                } else {
                    self.push_notification(
                        format!("No titles start with {}", letter.to_ascii_uppercase()),
                        NotificationLevel::Warning,
                    );
                }
            }
            Action::ToggleYear(year) => {
                self.engine.toggle_year(&year);
                self.on_projection_changed();
            }
            Action::ClearYearFilter => {
                self.engine.clear_year_filter();
                self.on_projection_changed();
            }

            // Detail overlay
            Action::OpenDetail => {
                if !self.engine.open_detail() {
                    self.push_notification(
                        "Nothing to show: the catalog is empty".to_string(),
                        NotificationLevel::Info,
                    );
                }
            }
            Action::CloseDetail => self.engine.close_detail(),
            Action::ZoomIn => self.engine.zoom_in(),
            Action::ZoomOut => self.engine.zoom_out(),
            Action::ZoomReset => self.engine.zoom_reset(),

            // Panels
            Action::FocusNext => self.set_focus(self.focus.next()),
            Action::FocusPrev => self.set_focus(self.focus.prev()),
            Action::FocusSearch => self.set_focus(Focus::Search),
            Action::FocusGallery => self.set_focus(Focus::Gallery),
            Action::ToggleGuide => {
                self.guide.user_collapsed = !self.guide.user_collapsed;
                if self.guide.user_collapsed && self.focus.in_guide() {
                    self.focus = Focus::Gallery;
                }
            }
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if focus.in_guide() {
            self.guide.user_collapsed = false;
        }
        if focus == Focus::Rail {
            self.guide.follow_current(self.engine.current_index());
        }
    }

    fn on_projection_changed(&mut self) {
        self.guide.follow_current(self.engine.current_index());
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notification_counter += 1;
        self.notifications.push(Notification {
            id: self.notification_counter,
            message,
            level,
            ttl_ticks: 60,
        });

        while self.notifications.len() > 3 {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, advance the carousel animation.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);

        if let Some(carousel) = self.engine.viewport_mut() {
            carousel.tick();
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let (layout, visibility) = AppLayout::compute(area, self.guide.user_collapsed);
        let snapshot = self.engine.snapshot();

        if let Some(control_area) = layout.control {
            control_panel::render(frame, control_area, &snapshot);
        }

        self.carousel_area.set(layout.carousel);
        if let Some(carousel) = self.engine.viewport() {
            carousel.render(
                frame,
                layout.carousel,
                &snapshot.projection,
                self.focus == Focus::Gallery,
            );
        }

        self.guide
            .render(frame, layout.guide, &snapshot, self.focus, visibility);

        self.render_status_bar(frame, layout.status, &snapshot);

        // Overlays
        self.render_notifications(frame, area);

        if let Some(ref overlay) = snapshot.overlay {
            detail_modal::render(frame, area, overlay);
        }

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, snapshot: &GallerySnapshot) {
        let filtering = if snapshot.filters.is_filtering() {
            Span::styled(" filtered ", theme::chip_active(theme::SKY))
        } else {
            Span::raw("")
        };

        let status = Line::from(vec![
            Span::styled(" GALLERIA ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(
                self.focus.label(),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            Span::styled(snapshot.position_label(), Style::default().fg(theme::SKY)),
            Span::raw(" │ "),
            Span::styled(snapshot.filters.sort_mode.label(), theme::muted()),
            Span::raw(" "),
            filtering,
            Span::raw(" │ "),
            Span::styled("←→", theme::key_hint()),
            Span::raw(":browse "),
            Span::styled("s", theme::key_hint()),
            Span::raw(":surprise "),
            Span::styled("/", theme::key_hint()),
            Span::raw(":search "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = self.notifications.len() as u16;
        let x = area.width.saturating_sub(max_width + 1);
        let y = 1;

        let notification_area = Rect::new(x, y, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {prefix} "),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);

        let keybindings = vec![
            ("Gallery:", ""),
            ("← / [", "Previous artwork"),
            ("→ / ]", "Next artwork"),
            ("s", "Surprise me (random artwork)"),
            ("Enter / d", "Open details"),
            ("o / O", "Next / previous sort order"),
            ("/", "Search titles and artists"),
            ("Tab / Shift+Tab", "Cycle focus through the guide"),
            ("g", "Collapse / expand the guide"),
            ("q / Ctrl+C", "Quit"),
            ("", ""),
            ("Search:", ""),
            ("type", "Filter as you type"),
            ("Ctrl+U / Ctrl+W", "Clear text / delete word"),
            ("Enter / Esc", "Back to the gallery"),
            ("", ""),
            ("Letters / Years / Collection:", ""),
            ("A-Z", "Toggle a letter (Letters)"),
            ("↑↓ / j k", "Move cursor"),
            ("Enter / Space", "Toggle chip or show artwork"),
            ("", ""),
            ("Details:", ""),
            ("+ / -", "Zoom in / out"),
            ("0", "Reset zoom"),
            ("Esc / q / Enter", "Close"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", theme::title())),
            Line::raw(""),
        ];

        for (key, desc) in &keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {key}"), theme::title())));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<22}", key),
                        Style::default()
                            .fg(theme::PRIMARY_LIGHT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("?", Style::default().fg(theme::PRIMARY_LIGHT)),
            Span::raw(" or "),
            Span::styled("Esc", Style::default().fg(theme::PRIMARY_LIGHT)),
            Span::raw(" to close"),
        ]));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
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
    .split(popup_layout[1])[1]
}
