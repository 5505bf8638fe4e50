//! Shared test utilities for cookie-extractor
//!
//! - Cookie JSON fixtures written to temporary directories
//! - TUI terminal testing helpers

pub mod fixtures;
pub mod terminal;
