//! Path utilities for the cookie-extractor data directory

use std::path::PathBuf;
use std::sync::OnceLock;

/// Global storage for custom data directory path
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the data directory with an optional custom path.
/// Must be called early in main() before any other path functions are used.
/// If custom_path is None, uses the default ~/.cookie-extractor location.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    if DATA_DIR.set(path.clone()).is_err() {
        let existing = DATA_DIR
            .get()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        tracing::debug!(
            path = %path.display(),
            existing = %existing,
            "Data directory already initialized"
        );
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".cookie-extractor"))
        .unwrap_or_else(|| PathBuf::from(".cookie-extractor"))
}

/// Get the base data directory.
/// Returns the custom path if set via init_data_dir(), otherwise ~/.cookie-extractor
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the logs directory (~/.cookie-extractor/logs)
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Get the log file path (~/.cookie-extractor/logs/cookie-extractor.log)
pub fn log_file_path() -> PathBuf {
    logs_dir().join("cookie-extractor.log")
}

/// Get the config file path (~/.cookie-extractor/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

/// Expand a leading `~` to the home directory
pub fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest.trim_start_matches('/'));
        }
    }
    PathBuf::from(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_nest_under_data_dir() {
        let base = data_dir();
        assert_eq!(config_path(), base.join("config.toml"));
        assert_eq!(
            log_file_path(),
            base.join("logs").join("cookie-extractor.log")
        );
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/tmp/a.json"), PathBuf::from("/tmp/a.json"));
        assert_eq!(expand_home("a.json"), PathBuf::from("a.json"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/a.json"), home.join("a.json"));
        }
    }
}
