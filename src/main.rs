//! VocabWall - word-wall poster and flash-card exporter.
//!
//! Fetches vocabulary rows from a published Google Sheet (or local files),
//! composes themed poster and card descriptions, and renders them to
//! SVG/HTML documents and ZIP archives.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vocabwall::cli::{CardsArgs, ConfigArgs, LabelsArgs, WallArgs};

/// VocabWall - word-wall poster and flash-card exporter
#[derive(Parser, Debug)]
#[command(name = vocabwall::constants::APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the unit labels available in the vocabulary sheet
    Labels(LabelsArgs),
    /// Render the word wall for a unit label (or a local word list)
    Wall(WallArgs),
    /// Render every flash card under a unit label and bundle them as a ZIP
    Cards(CardsArgs),
    /// Show or update the persisted configuration
    Config(ConfigArgs),
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vocabwall=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Labels(args) => args.execute(),
        Command::Wall(args) => args.execute(),
        Command::Cards(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }
}
