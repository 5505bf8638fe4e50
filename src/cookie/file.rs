//! Reading cookie files and writing exports

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;

use super::error::{CookieError, Result};

/// Read a cookie file as UTF-8 text
pub fn read_cookie_file(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|source| CookieError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "Read cookie file");
    Ok(contents)
}

/// Write an export next to its destination, then rename it into place.
///
/// The destination is only replaced once the new contents are fully on
/// disk, so a failure leaves any earlier export intact.
pub fn write_export(path: &Path, contents: &str) -> Result<()> {
    let write_error = |source: std::io::Error| CookieError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    builder.prefix(".cookie-extractor-").suffix(".tmp");
    // tempfile defaults to 0600. A fresh export gets the umask-narrowed
    // 0666 that `File::create` would give it.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(write_error)?;
    // Re-saving keeps the destination's mode instead of the temp file's.
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => tmp
            .as_file()
            .set_permissions(meta.permissions())
            .map_err(write_error)?,
        _ => {}
    }
    tmp.write_all(contents.as_bytes()).map_err(write_error)?;
    tmp.as_file().sync_all().map_err(write_error)?;
    tmp.persist(path).map_err(|e| write_error(e.error))?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "Wrote cookie export");
    Ok(())
}
