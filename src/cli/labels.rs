//! Labels command: list the unit labels available in the sheet.

use clap::Args;

use crate::cli::common::{CliResult, SourceArgs};
use crate::config::Config;
use crate::sheet;

/// List the unique unit labels present in the vocabulary sheet
#[derive(Debug, Clone, Args)]
pub struct LabelsArgs {
    #[command(flatten)]
    source: SourceArgs,
}

impl LabelsArgs {
    /// Execute the labels command.
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();
        let rows = self.source.load_rows(&config)?;

        let labels = sheet::unique_labels(&rows);
        for label in &labels {
            println!("{label}");
        }
        eprintln!("{} label(s)", labels.len());
        Ok(())
    }
}
