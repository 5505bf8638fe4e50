//! Rebuild cookie JSON from displayed rows

use super::display::{Column, DisplayRow};
use super::error::{CookieError, Result};
use super::record::CookieRecord;

/// JSON layout of an export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Two-space indented array
    #[default]
    Pretty,
    /// Single line
    Compact,
}

/// Export rows as a pretty-printed JSON array
pub fn export(rows: &[DisplayRow]) -> Result<String> {
    export_with(rows, ExportFormat::Pretty)
}

pub fn export_with(rows: &[DisplayRow], format: ExportFormat) -> Result<String> {
    let records = rows_to_records(rows)?;

    let mut json = match format {
        ExportFormat::Pretty => serde_json::to_string_pretty(&records),
        ExportFormat::Compact => serde_json::to_string(&records),
    }
    .map_err(CookieError::Serialize)?;
    json.push('\n');

    tracing::debug!(rows = records.len(), ?format, "Exported cookies");
    Ok(json)
}

/// Invert the display coercions for every row.
///
/// Text fields come from the cells, the expiry comes from the row's record.
pub fn rows_to_records(rows: &[DisplayRow]) -> Result<Vec<CookieRecord>> {
    if rows.is_empty() {
        return Err(CookieError::NoData);
    }

    rows.iter()
        .enumerate()
        .map(|(index, row)| row_to_record(index, row))
        .collect()
}

fn row_to_record(index: usize, row: &DisplayRow) -> Result<CookieRecord> {
    Ok(CookieRecord {
        domain: row.cell(Column::Domain).to_string(),
        name: row.cell(Column::Name).to_string(),
        value: row.cell(Column::Value).to_string(),
        expiration_date: row.record().expiration_date,
        http_only: parse_flag(row.cell(Column::HttpOnly)),
        path: row.cell(Column::Path).to_string(),
        same_site: row.cell(Column::SameSite).to_string(),
        secure: parse_flag(row.cell(Column::Secure)),
        id: parse_id(index, row.cell(Column::Id))?,
    })
}

fn parse_flag(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("true")
}

fn parse_id(row: usize, text: &str) -> Result<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| CookieError::Export {
        row,
        field: Column::Id.field_name(),
        value: text.to_string(),
    })
}
