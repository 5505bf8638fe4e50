//! Cookie records and the JSON parser that produces them
//!
//! Input is the array format written by browser cookie-export extensions.
//! Field types in those exports drift between tools, so every field is read
//! leniently: text fields accept any scalar, timestamps and ids accept
//! numeric strings, and flags accept `"true"`/`"false"` strings.

use serde::Serialize;
use serde_json::{Map, Value};

use super::error::{CookieError, Result};

/// Path used when a cookie omits its `path` field
pub const DEFAULT_PATH: &str = "/";

/// One browser cookie, with defaults already applied
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieRecord {
    pub domain: String,
    pub name: String,
    pub value: String,
    /// Seconds since the Unix epoch; `0.0` marks a session cookie
    pub expiration_date: f64,
    pub http_only: bool,
    pub path: String,
    pub same_site: String,
    pub secure: bool,
    pub id: i64,
}

impl Default for CookieRecord {
    fn default() -> Self {
        Self {
            domain: String::new(),
            name: String::new(),
            value: String::new(),
            expiration_date: 0.0,
            http_only: false,
            path: DEFAULT_PATH.to_string(),
            same_site: String::new(),
            secure: false,
            id: 0,
        }
    }
}

impl CookieRecord {
    /// Whether the cookie has no expiration (lives for the browser session)
    pub fn is_session(&self) -> bool {
        self.expiration_date == 0.0
    }

    /// Build a record from one element of the exported array.
    ///
    /// `index` is the element's position, reported in errors.
    pub fn from_json(index: usize, object: &Map<String, Value>) -> Result<Self> {
        let field = move |name: &'static str| FieldReader {
            index,
            name,
            value: object.get(name),
        };

        Ok(Self {
            domain: field("domain").text()?,
            name: field("name").text()?,
            value: field("value").text()?,
            expiration_date: field("expirationDate").timestamp()?,
            http_only: field("httpOnly").flag()?,
            path: field("path")
                .optional_text()?
                .unwrap_or_else(|| DEFAULT_PATH.to_string()),
            same_site: field("sameSite").text()?,
            secure: field("secure").flag()?,
            id: field("id").integer()?,
        })
    }
}

/// Parse raw cookie text into records.
///
/// Blank text is rejected before any JSON parsing is attempted.
pub fn parse(raw: &str) -> Result<Vec<CookieRecord>> {
    if raw.trim().is_empty() {
        return Err(CookieError::EmptyInput);
    }

    let document: Value = serde_json::from_str(raw)?;
    let Value::Array(elements) = document else {
        return Err(CookieError::NotAnArray {
            found: json_type_name(&document),
        });
    };

    let records = elements
        .iter()
        .enumerate()
        .map(|(index, element)| match element {
            Value::Object(object) => CookieRecord::from_json(index, object),
            other => Err(CookieError::NotAnObject {
                index,
                found: json_type_name(other),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = records.len(), "Parsed cookie records");
    Ok(records)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Reads a single field of a cookie object with the lenient coercions
struct FieldReader<'a> {
    index: usize,
    name: &'static str,
    value: Option<&'a Value>,
}

impl FieldReader<'_> {
    fn invalid(&self, value: &Value) -> CookieError {
        CookieError::InvalidField {
            index: self.index,
            field: self.name,
            value: value.to_string(),
        }
    }

    fn optional_text(&self) -> Result<Option<String>> {
        match self.value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(Value::Bool(b)) => Ok(Some(b.to_string())),
            Some(other) => Err(self.invalid(other)),
        }
    }

    fn text(&self) -> Result<String> {
        Ok(self.optional_text()?.unwrap_or_default())
    }

    fn timestamp(&self) -> Result<f64> {
        let parsed = match self.value {
            None | Some(Value::Null) => return Ok(0.0),
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) if s.trim().is_empty() => return Ok(0.0),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(_) => None,
        };

        match parsed {
            Some(secs) if secs.is_finite() => Ok(secs),
            _ => Err(self.invalid(self.value.unwrap_or(&Value::Null))),
        }
    }

    fn flag(&self) -> Result<bool> {
        match self.value {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::String(s)) => Ok(s.trim().eq_ignore_ascii_case("true")),
            Some(other) => Err(self.invalid(other)),
        }
    }

    fn integer(&self) -> Result<i64> {
        let parsed = match self.value {
            None | Some(Value::Null) => return Ok(0),
            Some(Value::Number(n)) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Some(Value::String(s)) if s.trim().is_empty() => return Ok(0),
            Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
            Some(_) => None,
        };

        parsed.ok_or_else(|| self.invalid(self.value.unwrap_or(&Value::Null)))
    }
}
