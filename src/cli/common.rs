//! Shared CLI plumbing: error kinds, exit codes, and sheet-source flags.

use clap::Args;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::sheet::{self, SheetSource};

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// CLI-facing error with a stable exit code per kind.
#[derive(Debug)]
pub enum CliError {
    /// Bad or missing user input (exit code 2).
    Validation(String),
    /// Filesystem or rendering failure (exit code 1).
    Io(String),
    /// Sheet download failure (exit code 3).
    Network(String),
}

impl CliError {
    /// Builds a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Builds an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Builds a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Process exit code for this error kind.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Validation(_) => 2,
            Self::Network(_) => 3,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) | Self::Io(message) | Self::Network(message) => {
                write!(f, "{message}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Flags selecting where vocabulary rows come from.
///
/// Either a local CSV export (offline, also what the end-to-end tests use)
/// or the configured Google Sheet.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Spreadsheet id (overrides the configured one)
    #[arg(long, value_name = "ID")]
    pub sheet_id: Option<String>,

    /// Sheet tab gid (overrides the configured one)
    #[arg(long, value_name = "GID")]
    pub gid: Option<String>,

    /// Read a local CSV export instead of fetching from Google Sheets
    #[arg(long, value_name = "FILE", conflicts_with_all = ["sheet_id", "gid"])]
    pub csv: Option<PathBuf>,
}

impl SourceArgs {
    /// Loads and parses vocabulary rows from the selected source.
    pub fn load_rows(&self, config: &Config) -> CliResult<Vec<Vec<String>>> {
        let csv_text = if let Some(path) = &self.csv {
            fs::read_to_string(path)
                .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?
        } else {
            let spreadsheet_id = self
                .sheet_id
                .clone()
                .or_else(|| config.sheet.spreadsheet_id.clone())
                .ok_or_else(|| {
                    CliError::validation(
                        "No spreadsheet id. Pass --sheet-id, or set it once with `vocabwall config --sheet-id <ID>`.",
                    )
                })?;
            let source = SheetSource {
                spreadsheet_id,
                gid: self.gid.clone().unwrap_or_else(|| config.sheet.gid.clone()),
            };
            source
                .fetch_csv()
                .map_err(|e| CliError::network(format!("{e:#}")))?
        };

        sheet::parse_rows(&csv_text).map_err(|e| CliError::io(format!("{e:#}")))
    }
}

/// Resolves the output directory, creating it if missing.
pub fn ensure_output_dir(flag: Option<&PathBuf>, config: &Config) -> CliResult<PathBuf> {
    let dir = flag.cloned().unwrap_or_else(|| config.export.output_dir.clone());
    fs::create_dir_all(&dir)
        .map_err(|e| CliError::io(format!("Failed to create output dir {}: {e}", dir.display())))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(CliError::io("x").exit_code(), 1);
        assert_eq!(CliError::validation("x").exit_code(), 2);
        assert_eq!(CliError::network("x").exit_code(), 3);
    }
}
