//! Table projection of cookie records
//!
//! A [`DisplayRow`] pairs the rendered cells with the record they came from.
//! The formatted expiry drops sub-second precision and depends on the local
//! timezone, so export always reads the timestamp from the record instead.

use chrono::{Local, TimeZone};

use super::record::CookieRecord;

/// Format used for the expiry column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Table columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Domain,
    Name,
    Value,
    Expires,
    HttpOnly,
    Path,
    SameSite,
    Secure,
    Id,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::Domain,
        Column::Name,
        Column::Value,
        Column::Expires,
        Column::HttpOnly,
        Column::Path,
        Column::SameSite,
        Column::Secure,
        Column::Id,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Header label
    pub fn title(self) -> &'static str {
        match self {
            Column::Domain => "Domain",
            Column::Name => "Name",
            Column::Value => "Value",
            Column::Expires => "Expires",
            Column::HttpOnly => "HttpOnly",
            Column::Path => "Path",
            Column::SameSite => "SameSite",
            Column::Secure => "Secure",
            Column::Id => "ID",
        }
    }

    /// JSON field name in the cookie export format
    pub fn field_name(self) -> &'static str {
        match self {
            Column::Domain => "domain",
            Column::Name => "name",
            Column::Value => "value",
            Column::Expires => "expirationDate",
            Column::HttpOnly => "httpOnly",
            Column::Path => "path",
            Column::SameSite => "sameSite",
            Column::Secure => "secure",
            Column::Id => "id",
        }
    }
}

/// A rendered table row plus the record it was rendered from
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    record: CookieRecord,
    cells: [String; 9],
}

impl DisplayRow {
    pub fn record(&self) -> &CookieRecord {
        &self.record
    }

    pub fn cells(&self) -> &[String; 9] {
        &self.cells
    }

    pub fn cell(&self, column: Column) -> &str {
        &self.cells[column.index()]
    }
}

/// Render a record into its nine display cells
pub fn to_display_row(record: &CookieRecord) -> DisplayRow {
    let cells = [
        record.domain.clone(),
        record.name.clone(),
        record.value.clone(),
        format_expiration(record.expiration_date),
        bool_text(record.http_only).to_string(),
        record.path.clone(),
        record.same_site.clone(),
        bool_text(record.secure).to_string(),
        record.id.to_string(),
    ];

    DisplayRow {
        record: record.clone(),
        cells,
    }
}

/// Render many records, preserving order
pub fn to_display_rows(records: &[CookieRecord]) -> Vec<DisplayRow> {
    records.iter().map(to_display_row).collect()
}

/// Local-time rendering of an expiry, or empty for session cookies and
/// values outside the representable range.
pub fn format_expiration(secs: f64) -> String {
    if secs == 0.0 || !secs.is_finite() {
        return String::new();
    }

    let whole = secs.floor();
    let nanos = ((secs - whole) * 1_000_000_000.0) as u32;
    Local
        .timestamp_opt(whole as i64, nanos.min(999_999_999))
        .earliest()
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn bool_text(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
