//! Wall command: compose and render word-wall posters.

use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::cli::common::{ensure_output_dir, CliError, CliResult, SourceArgs};
use crate::config::Config;
use crate::export::{wall_image_name, OutputFormat};
use crate::models::WordPair;
use crate::poster;
use crate::sheet;
use crate::theme::Theme;

/// Render the word wall for a unit label (or a local word list)
#[derive(Debug, Clone, Args)]
pub struct WallArgs {
    /// Unit label to render (filters sheet rows; also the poster title)
    #[arg(short, long, value_name = "LABEL", required_unless_present = "words")]
    pub label: Option<String>,

    /// Local word list instead of the sheet: one `english<TAB>chinese` per line
    #[arg(long, value_name = "FILE")]
    pub words: Option<PathBuf>,

    /// Theme to render; omit to render all six
    #[arg(short, long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Output document format
    #[arg(short, long, value_enum, default_value = "svg")]
    pub format: OutputFormat,

    /// Dump the poster description as JSON next to each document
    #[arg(long)]
    pub json: bool,

    /// Output directory (defaults to the configured one)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    source: SourceArgs,
}

impl WallArgs {
    /// Execute the wall command.
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();
        let label = self.label.clone().unwrap_or_default();

        let pairs = self.load_pairs(&config, &label)?;
        info!(count = pairs.len(), label, "composing word wall");

        let themes: Vec<Theme> = self.theme.as_deref().map_or_else(
            || Theme::ALL.to_vec(),
            |id| vec![Theme::parse(id)],
        );

        let out_dir = ensure_output_dir(self.output.as_ref(), &config)?;
        for theme in themes {
            let description = poster::compose(&pairs, &label, theme);
            let document = self.format.render_poster(&description);
            let path = out_dir.join(wall_image_name(&label, theme.id(), self.format.extension()));
            fs::write(&path, document)
                .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))?;
            println!("✓ {}", path.display());

            if self.json {
                let json_path = path.with_extension("json");
                let json = serde_json::to_string_pretty(&description)
                    .map_err(|e| CliError::io(format!("Failed to serialize poster: {e}")))?;
                fs::write(&json_path, json).map_err(|e| {
                    CliError::io(format!("Failed to write {}: {e}", json_path.display()))
                })?;
                println!("✓ {}", json_path.display());
            }
        }
        Ok(())
    }

    fn load_pairs(&self, config: &Config, label: &str) -> CliResult<Vec<WordPair>> {
        if let Some(path) = &self.words {
            let text = fs::read_to_string(path)
                .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?;
            let pairs = WordPair::parse_word_list(&text);
            if pairs.is_empty() {
                return Err(CliError::validation(format!(
                    "{} contains no usable word pairs",
                    path.display()
                )));
            }
            Ok(pairs)
        } else {
            let rows = self.source.load_rows(config)?;
            sheet::wall_pairs(&rows, label).map_err(|e| CliError::validation(format!("{e:#}")))
        }
    }
}
