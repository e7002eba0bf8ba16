use crate::core::navigation::Direction;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for carousel animation and notification TTLs.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// A resolved action to execute.
    Action(Action),
    /// Notification to display to the user.
    Notification(Notification),
    /// Request to quit the application.
    Quit,
}

/// High-level actions dispatched by the input mappers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Step(Direction),
    Shuffle,
    SelectItem(String),

    // Filters
    SearchChanged(String),
    NextSort,
    PrevSort,
    ToggleLetter(char),
    ToggleYear(String),
    ClearYearFilter,

    // Detail overlay
    OpenDetail,
    CloseDetail,
    ZoomIn,
    ZoomOut,
    ZoomReset,

    // Panels
    FocusNext,
    FocusPrev,
    FocusSearch,
    FocusGallery,
    ToggleGuide,
    ShowHelp,
    CloseHelp,

    // Application
    Quit,
}

/// Which area receives panel-specific keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Gallery,
    Search,
    Letters,
    Years,
    Rail,
}

impl Focus {
    pub const ALL: [Focus; 5] = [
        Focus::Gallery,
        Focus::Search,
        Focus::Letters,
        Focus::Years,
        Focus::Rail,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Focus::Gallery => "Gallery",
            Focus::Search => "Search",
            Focus::Letters => "Letters",
            Focus::Years => "Years",
            Focus::Rail => "Rail",
        }
    }

    pub fn next(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + 1) % Focus::ALL.len()]
    }

    pub fn prev(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + Focus::ALL.len() - 1) % Focus::ALL.len()]
    }

    /// Whether this focus lives in the guide panel.
    pub fn in_guide(self) -> bool {
        self != Focus::Gallery
    }
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}
