use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::projection::SortMode;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub catalog: CatalogConfig,
    pub gallery: GalleryConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse support (wheel scrolls the carousel).
    pub mouse_enabled: bool,
    /// Start with the guide panel expanded.
    pub show_guide: bool,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

/// Catalog source configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog to browse instead of the bundled one.
    pub path: Option<PathBuf>,
}

/// Initial browsing state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub default_sort: SortMode,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_enabled: false,
            show_guide: true,
            log_level: "info".to_string(),
        }
    }
}

/// Fastest tick the event loop accepts.
pub const MIN_TICK_RATE_MS: u64 = 1;

/// A message produced while loading configuration.
///
/// Configuration is read before logging exists (the log filter comes from
/// it), so messages are held here and emitted once the logger is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    pub level: log::Level,
    pub message: String,
}

impl ConfigDiagnostic {
    fn new(level: log::Level, message: String) -> Self {
        Self { level, message }
    }

    pub fn emit(&self) {
        log::log!(self.level, "{}", self.message);
    }
}

/// A configuration together with what happened while reading it.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub diagnostics: Vec<ConfigDiagnostic>,
}

impl AppConfig {
    /// Load configuration from `~/.config/galleria/config.toml`.
    /// Falls back to `Default` if the file is missing or unparseable.
    pub fn load() -> LoadedConfig {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, with the same fallback.
    pub fn load_from(config_path: &Path) -> LoadedConfig {
        let mut diagnostics = Vec::new();
        let mut config = match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
                Ok(config) => {
                    diagnostics.push(ConfigDiagnostic::new(
                        log::Level::Info,
                        format!("Loaded config from {}", config_path.display()),
                    ));
                    config
                }
                Err(e) => {
                    diagnostics.push(ConfigDiagnostic::new(
                        log::Level::Warn,
                        format!(
                            "Failed to parse config at {}: {e}, using defaults",
                            config_path.display()
                        ),
                    ));
                    Self::default()
                }
            },
            Err(_) => {
                diagnostics.push(ConfigDiagnostic::new(
                    log::Level::Debug,
                    format!("No config file at {}, using defaults", config_path.display()),
                ));
                Self::default()
            }
        };
        config.clamp(&mut diagnostics);
        LoadedConfig {
            config,
            diagnostics,
        }
    }

    /// Pull out-of-range values back into range.
    fn clamp(&mut self, diagnostics: &mut Vec<ConfigDiagnostic>) {
        if self.tui.tick_rate_ms < MIN_TICK_RATE_MS {
            diagnostics.push(ConfigDiagnostic::new(
                log::Level::Warn,
                format!(
                    "tui.tick_rate_ms = {} is too small, using {MIN_TICK_RATE_MS}",
                    self.tui.tick_rate_ms
                ),
            ));
            self.tui.tick_rate_ms = MIN_TICK_RATE_MS;
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("galleria").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
