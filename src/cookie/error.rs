//! Error types for the cookie pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Broad category of a [`CookieError`], used for user-facing titles and
/// for callers that only care about which step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyInput,
    Parse,
    MissingPattern,
    InvalidPattern,
    NoData,
    Export,
    Read,
    Write,
}

impl ErrorKind {
    /// Dialog title shown when an error of this kind is reported
    pub fn title(self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "No Cookie Text",
            ErrorKind::Parse => "Malformed Cookie Text",
            ErrorKind::MissingPattern => "No Domain Pattern",
            ErrorKind::InvalidPattern => "Invalid Domain Pattern",
            ErrorKind::NoData => "Nothing To Save",
            ErrorKind::Export => "Export Failed",
            ErrorKind::Read => "Read Failed",
            ErrorKind::Write => "Write Failed",
        }
    }
}

#[derive(Debug, Error)]
pub enum CookieError {
    #[error("No cookie text supplied. Paste cookie JSON or open a file first.")]
    EmptyInput,

    #[error("Cookie text is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Cookie text must be a JSON array of cookie objects, found {found}")]
    NotAnArray { found: &'static str },

    #[error("Cookie at index {index} is not a JSON object (found {found})")]
    NotAnObject { index: usize, found: &'static str },

    #[error("Cookie at index {index} has an invalid `{field}` value: {value}")]
    InvalidField {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("No domain pattern supplied")]
    MissingPattern,

    #[error("Domain pattern is not a valid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("There are no matching cookies to save")]
    NoData,

    #[error("Row {row} has a `{field}` value that is not an integer: {value:?}")]
    Export {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Failed to serialize cookies: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CookieError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CookieError::EmptyInput => ErrorKind::EmptyInput,
            CookieError::Parse(_)
            | CookieError::NotAnArray { .. }
            | CookieError::NotAnObject { .. }
            | CookieError::InvalidField { .. } => ErrorKind::Parse,
            CookieError::MissingPattern => ErrorKind::MissingPattern,
            CookieError::InvalidPattern(_) => ErrorKind::InvalidPattern,
            CookieError::NoData => ErrorKind::NoData,
            CookieError::Export { .. } | CookieError::Serialize(_) => ErrorKind::Export,
            CookieError::Read { .. } => ErrorKind::Read,
            CookieError::Write { .. } => ErrorKind::Write,
        }
    }

    pub fn title(&self) -> &'static str {
        self.kind().title()
    }
}

pub type Result<T> = std::result::Result<T, CookieError>;
