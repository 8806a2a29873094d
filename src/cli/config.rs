//! Config command: show or update the persisted configuration.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;

/// Show or update the persisted configuration
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Set the spreadsheet id
    #[arg(long, value_name = "ID")]
    pub sheet_id: Option<String>,

    /// Set the sheet tab gid
    #[arg(long, value_name = "GID")]
    pub gid: Option<String>,

    /// Set the default output directory
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl ConfigArgs {
    /// Execute the config command.
    pub fn execute(&self) -> CliResult<()> {
        let mut config =
            Config::load().map_err(|e| CliError::io(format!("{e:#}")))?;

        let changed =
            self.sheet_id.is_some() || self.gid.is_some() || self.output_dir.is_some();
        if let Some(id) = &self.sheet_id {
            config.sheet.spreadsheet_id = Some(id.clone());
        }
        if let Some(gid) = &self.gid {
            config.sheet.gid = gid.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.export.output_dir = dir.clone();
        }

        if changed {
            config.save().map_err(|e| CliError::io(format!("{e:#}")))?;
            println!(
                "✓ Saved {}",
                Config::config_path().map_err(|e| CliError::io(format!("{e:#}")))?.display()
            );
        }

        let rendered = toml::to_string_pretty(&config)
            .map_err(|e| CliError::io(format!("Failed to render config: {e}")))?;
        print!("{rendered}");
        Ok(())
    }
}
