//! Domain pattern matching

use regex::{Regex, RegexBuilder};

use super::error::{CookieError, Result};
use super::record::CookieRecord;

/// A compiled, case-insensitive domain pattern.
///
/// Matching is a substring search: `twitter` matches `x.twitter.com`.
/// Anchor with `^`/`$` for an exact match.
#[derive(Debug, Clone)]
pub struct DomainPattern {
    regex: Regex,
}

impl DomainPattern {
    /// Compile a pattern after trimming surrounding whitespace
    pub fn new(pattern: &str) -> Result<Self> {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            return Err(CookieError::MissingPattern);
        }

        let regex = RegexBuilder::new(trimmed)
            .case_insensitive(true)
            .build()?;
        Ok(Self { regex })
    }

    /// The trimmed source pattern
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn matches(&self, record: &CookieRecord) -> bool {
        self.regex.is_match(&record.domain)
    }
}

/// Keep the records whose domain matches `pattern`, in their original order.
pub fn filter(records: &[CookieRecord], pattern: &str) -> Result<Vec<CookieRecord>> {
    let pattern = DomainPattern::new(pattern)?;
    Ok(filter_with(records, &pattern))
}

/// Same as [`filter`] with an already compiled pattern
pub fn filter_with(records: &[CookieRecord], pattern: &DomainPattern) -> Vec<CookieRecord> {
    let matched: Vec<CookieRecord> = records
        .iter()
        .filter(|record| pattern.matches(record))
        .cloned()
        .collect();

    tracing::debug!(
        pattern = pattern.as_str(),
        total = records.len(),
        matched = matched.len(),
        "Filtered cookies by domain"
    );
    matched
}
