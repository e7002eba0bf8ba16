/// Galleria - a terminal art gallery browser
///
/// Browsing state engine for a static art catalog (search, sort, letter
/// and year filters, looping navigation, detail overlay with zoom) and a
/// ratatui front end that drives it.

pub mod cli;
pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
