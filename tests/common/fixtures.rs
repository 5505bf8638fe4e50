//! Cookie JSON fixtures

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A small export mixing matching and non-matching domains, a session
/// cookie and a cookie with omitted optional fields.
pub const SAMPLE_COOKIES: &str = r#"[
  {
    "domain": ".twitter.com",
    "expirationDate": 1735689600.5,
    "hostOnly": false,
    "httpOnly": true,
    "name": "auth_token",
    "path": "/",
    "sameSite": "no_restriction",
    "secure": true,
    "session": false,
    "storeId": "0",
    "value": "deadbeef",
    "id": 1
  },
  {
    "domain": ".google.com",
    "httpOnly": false,
    "name": "NID",
    "sameSite": "lax",
    "secure": true,
    "value": "511=abc",
    "id": 2
  },
  {
    "domain": "x.com",
    "name": "ct0",
    "value": "café",
    "secure": false
  }
]"#;

/// Temporary directory holding `cookies.json` with [`SAMPLE_COOKIES`]
pub struct CookieDir {
    pub dir: TempDir,
    pub input: PathBuf,
}

impl CookieDir {
    pub fn new() -> Self {
        Self::with_contents(SAMPLE_COOKIES)
    }

    pub fn with_contents(contents: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let input = dir.path().join("cookies.json");
        fs::write(&input, contents).expect("Failed to write cookie fixture");
        Self { dir, input }
    }

    /// A path in the same directory that does not exist yet
    pub fn output(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
