//! Crate-internal test suites that span several modules.
//!
//! - `common`: shared catalog and engine fixtures
//! - `property`: proptest invariants for projection, navigation and zoom
//! - `unit`: table-driven and mock-based tests

mod common;
mod unit;
