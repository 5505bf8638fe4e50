//! Session state for the extractor
//!
//! The session owns the loaded cookie text and the derived result set, and
//! drives the cookie pipeline for each user action.

pub mod extraction;

pub use extraction::{ExtractionSession, Source};
