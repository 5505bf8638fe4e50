//! Cookie record pipeline
//!
//! `parse` → `filter` → `to_display_row` → `export`, plus the file helpers
//! the shell uses around them. Everything here is synchronous and free of
//! UI state.

mod display;
mod error;
mod export;
mod file;
mod filter;
mod record;

pub use display::{
    bool_text, format_expiration, to_display_row, to_display_rows, Column, DisplayRow,
    TIMESTAMP_FORMAT,
};
pub use error::{CookieError, ErrorKind, Result};
pub use export::{export, export_with, rows_to_records, ExportFormat};
pub use file::{read_cookie_file, write_export};
pub use filter::{filter, filter_with, DomainPattern};
pub use record::{parse, CookieRecord, DEFAULT_PATH};
