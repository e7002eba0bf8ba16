//! File-backed logging for the TUI.
//!
//! The terminal is owned by ratatui while the app runs, so there is no
//! stdout layer: everything goes to a daily-rolling JSON log in the app data
//! directory. `log` macros are bridged into `tracing` by the subscriber.

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Base name of the rolling log file.
pub const LOG_FILE_NAME: &str = "galleria.log";

/// Directory log files are written to.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("galleria").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Initialize logging for TUI mode.
///
/// `default_filter` applies when `RUST_LOG` is unset. Returns a
/// `WorkerGuard` that must stay alive until shutdown so buffered lines are
/// flushed.
pub fn init_tui(default_filter: &str) -> WorkerGuard {
    init_tui_in(&log_dir(), default_filter)
}

/// [`init_tui`] writing into `log_dir`.
///
/// Only the first call installs a subscriber; later calls report the
/// failure on stderr and return a guard for an unused writer.
pub fn init_tui_in(log_dir: &Path, default_filter: &str) -> WorkerGuard {
    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter);

    // No stdout layer, the TUI owns the terminal.
    // `try_init` also installs the `log` bridge.
    if let Err(e) = tracing_subscriber::registry().with(file_layer).try_init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    tracing::info!(
        path = ?log_dir.join(LOG_FILE_NAME),
        "Logging initialized (daily rolling)"
    );

    guard
}
