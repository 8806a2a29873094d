//! CLI command handlers for VocabWall.
//!
//! Headless, scriptable access to the composition and export pipeline for
//! automation, testing, and batch use.

pub mod cards;
pub mod common;
pub mod config;
pub mod labels;
pub mod wall;

// Re-export types used by main.rs and tests
pub use cards::CardsArgs;
pub use common::{CliError, CliResult};
pub use config::ConfigArgs;
pub use labels::LabelsArgs;
pub use wall::WallArgs;
