//! Command-line arguments. Anything given here overrides `config.toml`.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::config::AppConfig;
use crate::core::projection::SortMode;

#[derive(Debug, Parser)]
#[command(
    name = "galleria",
    version,
    about = "Galleria - browse an art collection in the terminal"
)]
pub struct Args {
    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON catalog to browse instead of the bundled collection.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Initial sort order (default, title-asc, title-desc, creator-asc,
    /// creator-desc, year-asc, year-desc).
    #[arg(long, value_name = "MODE", value_parser = SortMode::from_str)]
    pub sort: Option<SortMode>,

    /// Scroll the carousel with the mouse wheel.
    #[arg(long)]
    pub mouse: bool,
}

impl Args {
    /// Overlay the given flags onto a loaded configuration.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(path) = &self.catalog {
            config.catalog.path = Some(path.clone());
        }
        if let Some(mode) = self.sort {
            config.gallery.default_sort = mode;
        }
        if self.mouse {
            config.tui.mouse_enabled = true;
        }
    }
}
