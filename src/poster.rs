//! Poster composition: word pairs + label + theme -> `PosterDescription`.
//!
//! Pure assembly, no I/O and no hidden state; identical inputs always yield
//! a structurally identical description, so per-theme composition can run
//! from any number of callers at once.

use crate::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_TITLE, FONT_BOOST, FOOTER_TEXT,
};
use crate::layout::{base_font_size, compute_font_size, compute_grid, MIN_SIZE_FACTOR};
use crate::models::{hue_of, CellSpec, ColorAssignment, PosterDescription, WordPair};
use crate::theme::Theme;

const DARK_BOX_SHADOW: &str = "0 4px 6px rgba(0, 0, 0, 0.1)";
const DARK_TEXT_SHADOW: &str = "0 1px 2px rgba(0, 0, 0, 0.2)";
const FOOTER_ON_DARK: &str = "rgba(255, 255, 255, 0.6)";
const FOOTER_ON_LIGHT: &str = "rgba(0, 0, 0, 0.4)";

/// Composes the full poster description for a word list.
///
/// Cells come out in input order; the grid fills row-major downstream, so
/// the caller's sequence (sheet-row order, alphabetical, ...) is what the
/// viewer reads. An empty `label` keeps the default title.
#[must_use]
pub fn compose(word_pairs: &[WordPair], label: &str, theme: Theme) -> PosterDescription {
    let palette = theme.palette();
    let grid = compute_grid(word_pairs.len());
    let base = base_font_size(grid.cols);

    let cells = word_pairs
        .iter()
        .enumerate()
        .map(|(index, pair)| {
            let accent = palette.accents[index % palette.accents.len()];
            let font_size = compute_font_size(pair.en.chars().count(), base, MIN_SIZE_FACTOR)
                * FONT_BOOST;
            CellSpec {
                english: pair.en.clone(),
                chinese: pair.cn.clone(),
                font_size_px: font_size,
                colors: cell_colors(theme, accent),
            }
        })
        .collect();

    let label = label.trim();
    let title = if label.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        format!("{} - {}", label.to_uppercase(), DEFAULT_TITLE)
    };

    PosterDescription {
        title,
        footer: FOOTER_TEXT.to_string(),
        footer_color: if theme.is_dark() { FOOTER_ON_DARK } else { FOOTER_ON_LIGHT }.to_string(),
        background: palette.background,
        text_color: palette.text_color.to_string(),
        grid,
        cells,
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    }
}

/// Resolves the color assignment for one cell.
///
/// Dark themes keep the palette text color and use the accent only for the
/// hue of the tint; light themes promote the accent to the literal text and
/// border color over a pastel tint of the same hue.
fn cell_colors(theme: Theme, accent: &str) -> ColorAssignment {
    let palette = theme.palette();
    let hue = hue_of(accent);

    if theme.is_dark() {
        return ColorAssignment {
            text: palette.text_color.to_string(),
            background: format!("hsla({hue}, 85%, 65%, 0.2)"),
            border: format!("hsla({hue}, 85%, 65%, 0.6)"),
            text_shadow: DARK_TEXT_SHADOW.to_string(),
            box_shadow: DARK_BOX_SHADOW.to_string(),
        };
    }

    let effects = palette.effects;
    ColorAssignment {
        text: accent.to_string(),
        background: format!("hsla({hue}, 85%, 95%, 0.8)"),
        border: accent.to_string(),
        text_shadow: effects.map_or(DARK_TEXT_SHADOW, |e| e.text_shadow).to_string(),
        box_shadow: effects.map_or(DARK_BOX_SHADOW, |e| e.box_shadow).to_string(),
    }
}
