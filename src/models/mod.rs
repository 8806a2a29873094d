//! Data models for vocabulary items, grids, colors, and poster descriptions.
//!
//! Models are plain data, independent of rendering and I/O. A poster or card
//! description fully determines the rendered output.

pub mod grid;
pub mod poster;
pub mod rgb;
pub mod word;

// Re-export all model types
pub use grid::GridSpec;
pub use poster::{CellSpec, ColorAssignment, Effects, GradientSpec, PosterDescription};
pub use rgb::{hue_of, RgbColor};
pub use word::{VocabCard, WordPair};
