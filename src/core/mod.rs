pub mod catalog;
pub mod engine;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod overlay;
pub mod projection;
pub mod stats;
pub mod viewport;
