//! Application-wide constants.
//!
//! Canvas geometry and font tuning values target the fixed 1920x1080 export
//! canvas; changing them shifts every composed poster.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "VocabWall";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "vocabwall";

/// Export canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 1920;

/// Export canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 1080;

/// Target aspect ratio for the poster grid (widescreen).
pub const TARGET_ASPECT: f64 = 16.0 / 9.0;

/// Outer padding of the poster grid in pixels.
pub const POSTER_PADDING: u32 = 40;

/// Gap between grid cells in pixels.
pub const CELL_GAP: u32 = 10;

/// Upper bound for the shared base font size of a poster.
pub const BASE_FONT_CAP: f64 = 36.0;

/// Width budget divided by column count to derive the base font size.
pub const BASE_FONT_BUDGET: f64 = 900.0;

/// Flat boost applied to every per-word font size.
pub const FONT_BOOST: f64 = 1.15;

/// Chinese sub-text renders at this fraction of the English size.
pub const CHINESE_FONT_RATIO: f64 = 0.75;

/// Default poster title when no label is supplied.
pub const DEFAULT_TITLE: &str = "單字牆";

/// Attribution line at the bottom of every poster and card.
pub const FOOTER_TEXT: &str = "Junyi Academy 均一教育平台";

/// Maximum length of a sanitized filename fragment.
pub const FILENAME_FRAGMENT_MAX: usize = 30;
