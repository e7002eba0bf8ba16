use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use galleria::cli::Args;
use galleria::config::{AppConfig, LoadedConfig};
use galleria::core::catalog::Catalog;
use galleria::core::engine::GalleryEngine;
use galleria::core::logging;
use galleria::tui::app::AppState;
use galleria::tui::events::{AppEvent, Notification, NotificationLevel};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let LoadedConfig {
        mut config,
        diagnostics,
    } = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    args.apply_to(&mut config);

    // Initialize logging, then report what happened while reading config
    let _log_guard = logging::init_tui(&config.tui.log_level);
    log::info!("Galleria v{} starting", galleria::VERSION);
    for diagnostic in &diagnostics {
        diagnostic.emit();
    }

    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let catalog = match config.catalog.path.as_deref() {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Falling back to bundled catalog: {e}");
                let _ = event_tx.send(AppEvent::Notification(Notification {
                    id: 0,
                    message: format!("Could not load {}; showing the bundled collection", path.display()),
                    level: NotificationLevel::Error,
                    ttl_ticks: 0,
                }));
                Catalog::bundled()?
            }
        },
        None => Catalog::bundled()?,
    };
    let catalog = Arc::new(catalog);
    log::info!("Browsing {} artworks", catalog.len());

    let engine = GalleryEngine::new(catalog).with_sort_mode(config.gallery.default_sort);
    let mut app = AppState::new(engine, &config.tui, event_rx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.tui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = app
        .run(&mut terminal, Duration::from_millis(config.tui.tick_rate_ms))
        .await;

    // Restore terminal
    disable_raw_mode()?;
    if config.tui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    drop(event_tx);
    log::info!("Galleria shutting down");

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
