//! Clipboard access and pasted-path handling

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum ClipboardError {
    Unavailable(String),
    NoText(String),
    WriteFailed(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "clipboard unavailable: {msg}"),
            ClipboardError::NoText(msg) => write!(f, "no text on clipboard: {msg}"),
            ClipboardError::WriteFailed(msg) => write!(f, "could not copy to clipboard: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Read the system clipboard as text.
pub fn read_clipboard_text() -> Result<String, ClipboardError> {
    let mut cb =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    cb.get_text()
        .map_err(|e| ClipboardError::NoText(e.to_string()))
}

/// Put `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut cb =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    cb.set_text(text.to_string())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}

/// Normalize pasted text that may represent a filesystem path.
///
/// Terminals deliver dropped files as plain, quoted or `file://` paths.
/// Multi-line text is never a path.
pub fn normalize_pasted_path(pasted: &str) -> Option<PathBuf> {
    let trimmed = pasted.trim();
    if trimmed.is_empty() || trimmed.contains('\n') {
        return None;
    }

    let trimmed = trimmed.trim_matches('"').trim_matches('\'').trim();
    if trimmed.is_empty() {
        return None;
    }

    // file:///path and file://localhost/path both map to /path
    let path = if let Some(stripped) = trimmed.strip_prefix("file://localhost") {
        stripped
    } else if let Some(stripped) = trimmed.strip_prefix("file://") {
        stripped
    } else {
        trimmed
    };

    Some(PathBuf::from(percent_decode(path)))
}

/// The pasted text names an existing file.
pub fn pasted_file(pasted: &str) -> Option<PathBuf> {
    let path = normalize_pasted_path(pasted)?;
    let path = crate::util::expand_home(&path.to_string_lossy());
    path.is_file().then_some(path)
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(h), Some(l)) = (from_hex(bytes[i + 1]), from_hex(bytes[i + 2])) {
                decoded.push(h * 16 + l);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

fn from_hex(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
