//! Cards command: render flash cards and bundle them into a ZIP archive.

use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::cards::compose_card;
use crate::cli::common::{ensure_output_dir, CliError, CliResult, SourceArgs};
use crate::config::Config;
use crate::export::{card_image_name, cards_zip_name, write_zip, OutputFormat};
use crate::sheet;

/// Render every flash card under a unit label
#[derive(Debug, Clone, Args)]
pub struct CardsArgs {
    /// Unit label to render
    #[arg(short, long, value_name = "LABEL")]
    pub label: String,

    /// Output document format
    #[arg(short, long, value_enum, default_value = "svg")]
    pub format: OutputFormat,

    /// Skip the ZIP archive, write only the per-card documents
    #[arg(long)]
    pub no_zip: bool,

    /// Output directory (defaults to the configured one)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    source: SourceArgs,
}

impl CardsArgs {
    /// Execute the cards command.
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();
        let rows = self.source.load_rows(&config)?;
        let cards = sheet::cards(&rows, &self.label)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        info!(count = cards.len(), label = %self.label, "rendering flash cards");
        let out_dir = ensure_output_dir(self.output.as_ref(), &config)?;
        let total = cards.len();
        let mut entries: Vec<(String, Vec<u8>)> = Vec::with_capacity(total);

        for (i, card) in cards.iter().enumerate() {
            let description = compose_card(card, i + 1, total);
            let document = self.format.render_card(&description);
            let name = card_image_name(i + 1, total, &card.english, self.format.extension());

            let path = out_dir.join(&name);
            fs::write(&path, &document)
                .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))?;
            println!("✓ {}", path.display());

            entries.push((name, document.into_bytes()));
        }

        if !self.no_zip {
            let zip_path = out_dir.join(cards_zip_name(&self.label));
            write_zip(&zip_path, &entries).map_err(|e| CliError::io(format!("{e:#}")))?;
            println!("✓ {} ({} card(s))", zip_path.display(), total);
        }
        Ok(())
    }
}
