//! Export filename construction.
//!
//! Labels and words come straight from user sheets, so every fragment is
//! sanitized before it reaches the filesystem or an archive entry name.

use regex::Regex;
use std::sync::OnceLock;

use crate::constants::FILENAME_FRAGMENT_MAX;

fn unsafe_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_\-]").unwrap())
}

/// Replaces filesystem-unsafe characters with `_` and truncates to 30 chars.
#[must_use]
pub fn sanitize(fragment: &str) -> String {
    let cleaned = unsafe_chars().replace_all(fragment, "_");
    cleaned.chars().take(FILENAME_FRAGMENT_MAX).collect()
}

/// Filename for a rendered word-wall poster.
#[must_use]
pub fn wall_image_name(label: &str, theme_id: &str, extension: &str) -> String {
    format!("VocabExport_{}_{}.{extension}", sanitize(label), sanitize(theme_id))
}

/// Filename for one rendered flash card.
///
/// The index is 1-based and zero-padded so archive listings sort in card
/// order: `#01_apple.svg`, `#02_banana.svg`, ...
#[must_use]
pub fn card_image_name(index: usize, total: usize, english: &str, extension: &str) -> String {
    let digits = (((total + 1) as f64).log10().ceil() as usize).max(2);
    let word = if english.trim().is_empty() {
        format!("card_{index}")
    } else {
        sanitize(english)
    };
    format!("#{index:0digits$}_{word}.{extension}")
}

/// Filename for the batch flash-card archive.
#[must_use]
pub fn cards_zip_name(label: &str) -> String {
    let label = sanitize(label);
    let label = if label.is_empty() { "cards".to_string() } else { label };
    format!("VocabExport_{label}_Cards.zip")
}
