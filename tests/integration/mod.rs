//! Integration tests for cookie-extractor
//!
//! These tests drive the pipeline, the session, the terminal app and the
//! binary together.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod pipeline;
pub mod tui;
