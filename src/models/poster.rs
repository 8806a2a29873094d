//! Declarative poster descriptions consumed by the rendering collaborators.
//!
//! A `PosterDescription` fully specifies a word wall: grid geometry, theming,
//! and per-cell text and colors. Renderers (SVG, HTML, or anything external)
//! only interpret it; they never re-derive layout or colors.

use serde::Serialize;

use super::GridSpec;

/// A two-stop linear background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradientSpec {
    /// Gradient direction in degrees (CSS convention).
    pub angle_deg: u16,
    /// Start color (hex).
    pub from: &'static str,
    /// End color (hex).
    pub to: &'static str,
}

impl GradientSpec {
    /// CSS value for the gradient.
    #[must_use]
    pub fn css(&self) -> String {
        format!("linear-gradient({}deg, {}, {})", self.angle_deg, self.from, self.to)
    }
}

/// Optional shadow treatment a light theme applies to its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Effects {
    /// CSS text-shadow value.
    pub text_shadow: &'static str,
    /// CSS box-shadow value.
    pub box_shadow: &'static str,
}

/// Resolved colors for one poster cell.
///
/// All values are CSS color/shadow strings so any CSS-aware renderer can
/// consume them directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorAssignment {
    /// Text color for both English and Chinese lines.
    pub text: String,
    /// Cell background tint.
    pub background: String,
    /// Color of the accent bar on the cell's left edge.
    pub border: String,
    /// Text shadow applied to the cell contents.
    pub text_shadow: String,
    /// Drop shadow applied to the cell box.
    pub box_shadow: String,
}

/// One word pair's visual slot within the poster grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellSpec {
    /// English word.
    pub english: String,
    /// Optional Chinese translation shown below the English word.
    pub chinese: Option<String>,
    /// Absolute font size for the English word, in pixels.
    pub font_size_px: f64,
    /// Resolved cell colors.
    pub colors: ColorAssignment,
}

/// A fully-specified word-wall poster, ready for rendering.
///
/// `cells` preserves the input word order; renderers fill the grid row-major
/// so the visual sequence reproduces the caller's ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosterDescription {
    /// Poster headline.
    pub title: String,
    /// Attribution line at the bottom.
    pub footer: String,
    /// Footer text color (translucent, adapted to theme darkness).
    pub footer_color: String,
    /// Background gradient behind the grid.
    pub background: GradientSpec,
    /// Title text color.
    pub text_color: String,
    /// Grid dimensions.
    pub grid: GridSpec,
    /// Per-cell content and styling, in input order.
    pub cells: Vec<CellSpec>,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}
