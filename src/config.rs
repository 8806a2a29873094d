//! Configuration management for the application.
//!
//! Settings live in a TOML file under the platform config directory so the
//! sheet id does not need repeating on every invocation. CLI flags override
//! everything here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::APP_NAME;

/// Google Sheet connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Spreadsheet document id (the long token in the sheet URL).
    pub spreadsheet_id: Option<String>,
    /// Tab id within the document.
    pub gid: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self { spreadsheet_id: None, gid: "0".to_string() }
    }
}

/// Export output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory rendered documents and archives are written to.
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { output_dir: PathBuf::from(".") }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Google Sheet connection settings.
    #[serde(default)]
    pub sheet: SheetConfig,
    /// Export output settings.
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Gets the platform config directory for the application.
    ///
    /// - Linux: `~/.config/VocabWall/`
    /// - macOS: `~/Library/Application Support/VocabWall/`
    /// - Windows: `%APPDATA%\VocabWall\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine platform config directory")?;
        Ok(base.join(APP_NAME))
    }

    /// Path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads the configuration file, if present.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed; a missing
    /// file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Saves the configuration, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.sheet.gid, "0");
        assert_eq!(config.sheet.spreadsheet_id, None);
        assert_eq!(config.export.output_dir, PathBuf::from("."));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config {
            sheet: SheetConfig { spreadsheet_id: Some("abc123".into()), gid: "7".into() },
            export: ExportConfig { output_dir: PathBuf::from("/tmp/out") },
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[sheet]\nspreadsheet_id = \"xyz\"\ngid = \"0\"\n").unwrap();
        assert_eq!(parsed.sheet.spreadsheet_id.as_deref(), Some("xyz"));
        assert_eq!(parsed.export, ExportConfig::default());
    }
}
