//! Extraction session state
//!
//! Holds the loaded cookie text, the records parsed from it and the rows
//! currently displayed. Every action computes its result first and only then
//! commits it, so a failed action leaves the visible state as it was.

use std::path::{Path, PathBuf};

use crate::cookie::{
    export_with, filter_with, parse, read_cookie_file, to_display_rows, write_export,
    CookieRecord, DisplayRow, DomainPattern, ExportFormat, Result,
};

/// Where the loaded cookie text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Pasted,
}

impl Source {
    /// Short label for the source pane
    pub fn label(&self) -> String {
        match self {
            Source::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Source::Pasted => "pasted text".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ExtractionSession {
    source: Option<Source>,
    text: String,
    loaded: Vec<CookieRecord>,
    rows: Vec<DisplayRow>,
    pattern: Option<String>,
    export_format: ExportFormat,
}

impl ExtractionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_export_format(mut self, format: ExportFormat) -> Self {
        self.export_format = format;
        self
    }

    /// Replace the cookie text with a file's contents.
    ///
    /// Previously parsed records and displayed rows are discarded.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let text = read_cookie_file(path)?;
        self.replace_text(text, Source::File(path.to_path_buf()));
        Ok(())
    }

    /// Replace the cookie text with pasted text
    pub fn load_text(&mut self, text: impl Into<String>) {
        self.replace_text(text.into(), Source::Pasted);
    }

    /// Forget the loaded text and everything derived from it
    pub fn clear(&mut self) {
        self.source = None;
        self.text.clear();
        self.loaded.clear();
        self.rows.clear();
    }

    fn replace_text(&mut self, text: String, source: Source) {
        tracing::info!(source = %source.label(), bytes = text.len(), "Loaded cookie text");
        self.text = text;
        self.source = Some(source);
        self.loaded.clear();
        self.rows.clear();
    }

    /// Parse the loaded text and display the cookies whose domain matches
    /// `pattern`. Returns the number of matches.
    pub fn extract(&mut self, pattern: &str) -> Result<usize> {
        let records = parse(&self.text)?;
        let compiled = DomainPattern::new(pattern)?;
        let rows = to_display_rows(&filter_with(&records, &compiled));

        tracing::info!(
            pattern = compiled.as_str(),
            loaded = records.len(),
            matched = rows.len(),
            "Extracted cookies"
        );

        self.pattern = Some(compiled.as_str().to_string());
        self.loaded = records;
        self.rows = rows;
        Ok(self.rows.len())
    }

    /// Serialize the displayed rows
    pub fn export_json(&self) -> Result<String> {
        export_with(&self.rows, self.export_format)
    }

    /// Export the displayed rows to `path`. Returns the number of cookies
    /// written.
    pub fn save(&self, path: &Path) -> Result<usize> {
        let json = self.export_json()?;
        write_export(path, &json)?;
        Ok(self.rows.len())
    }

    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn loaded_records(&self) -> &[CookieRecord] {
        &self.loaded
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// Pattern of the last successful extraction
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }
}
