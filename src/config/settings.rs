use std::fs;
use std::path::Path;

use serde::Deserialize;
use toml_edit::{DocumentMut, Item, Table};

use crate::cookie::ExportFormat;
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Pattern used on startup when nothing is remembered
    pub default_pattern: Option<String>,
    /// Restore the last successful pattern on startup
    pub remember_pattern: bool,
    /// Last pattern that produced a result (written back by the app)
    pub last_pattern: Option<String>,
    /// JSON layout for exports
    pub export_format: ExportFormat,
    /// File name offered by the save dialog
    pub default_export_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_pattern: None,
            remember_pattern: true,
            last_pattern: None,
            export_format: ExportFormat::Pretty,
            default_export_name: "cookies_filtered.json".to_string(),
        }
    }
}

/// TOML representation of the [ui] section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlUiConfig {
    pub default_pattern: Option<String>,
    pub remember_pattern: Option<bool>,
    pub last_pattern: Option<String>,
}

/// TOML representation of the [export] section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlExportConfig {
    pub pretty: Option<bool>,
    pub default_file_name: Option<String>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub ui: Option<TomlUiConfig>,
    pub export: Option<TomlExportConfig>,
}

impl Config {
    /// Load configuration from the data directory, merging with defaults.
    ///
    /// Writes the bundled example on first run. A config file that fails to
    /// parse is logged and ignored.
    pub fn load() -> Self {
        let config_file = config_path();

        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from a specific file, merging with defaults
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Config::default();
        };

        match Self::from_toml_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Ignoring invalid config file"
                );
                Config::default()
            }
        }
    }

    /// Parse config file contents on top of the defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Config::default();

        if let Some(ui) = toml_config.ui {
            config.default_pattern = ui.default_pattern.filter(|p| !p.trim().is_empty());
            if let Some(remember) = ui.remember_pattern {
                config.remember_pattern = remember;
            }
            config.last_pattern = ui.last_pattern.filter(|p| !p.trim().is_empty());
        }

        if let Some(export) = toml_config.export {
            if let Some(pretty) = export.pretty {
                config.export_format = if pretty {
                    ExportFormat::Pretty
                } else {
                    ExportFormat::Compact
                };
            }
            if let Some(name) = export.default_file_name.filter(|n| !n.trim().is_empty()) {
                config.default_export_name = name;
            }
        }

        Ok(config)
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    /// Pattern to pre-fill on startup: remembered pattern first, then the
    /// configured default
    pub fn initial_pattern(&self) -> Option<&str> {
        let remembered = if self.remember_pattern {
            self.last_pattern.as_deref()
        } else {
            None
        };
        remembered.or(self.default_pattern.as_deref())
    }
}

/// Save the last used pattern to `config_file`.
///
/// Updates `last_pattern` in the [ui] section while preserving the rest of
/// the file, comments included.
pub fn save_last_pattern_to(config_file: &Path, pattern: &str) -> std::io::Result<()> {
    let contents = if config_file.exists() {
        fs::read_to_string(config_file)?
    } else {
        String::new()
    };

    let mut doc: DocumentMut = contents
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    if !doc.contains_key("ui") {
        doc["ui"] = Item::Table(Table::new());
    }
    doc["ui"]["last_pattern"] = toml_edit::value(pattern);

    if let Some(parent) = config_file.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(config_file, doc.to_string())?;

    Ok(())
}
