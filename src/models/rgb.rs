//! RGB color handling with hex parsing and HSL hue extraction.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Supports parsing from hex strings (#RRGGBB) and extracting the HSL hue
/// angle used to derive per-cell tint colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use vocabwall::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Extracts the HSL hue angle of the color, rounded to the nearest degree.
    ///
    /// Grayscale colors (zero delta) report hue 0. The result is always in
    /// `[0, 360)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vocabwall::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 0, 0).hue_degrees(), 0);
    /// assert_eq!(RgbColor::new(0, 255, 0).hue_degrees(), 120);
    /// assert_eq!(RgbColor::new(0, 0, 255).hue_degrees(), 240);
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    #[allow(clippy::float_cmp)] // max is one of r/g/b verbatim
    pub fn hue_degrees(&self) -> u16 {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        if delta == 0.0 {
            return 0;
        }

        let h = if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        let h = h.round() as i32;
        (if h < 0 { h + 360 } else { h }) as u16
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Lenient hue extraction for theming.
///
/// Malformed input yields hue 0 instead of an error so per-cell coloring is
/// always defined, whatever the palette data says.
#[must_use]
pub fn hue_of(color: &str) -> u16 {
    RgbColor::from_hex(color).map_or(0, |c| c.hue_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_with_and_without_prefix() {
        assert_eq!(RgbColor::from_hex("#0080FF").unwrap(), RgbColor::new(0, 128, 255));
        assert_eq!(RgbColor::from_hex("0080ff").unwrap(), RgbColor::new(0, 128, 255));
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(RgbColor::from_hex("#fff").is_err());
        assert!(RgbColor::from_hex("not-a-color").is_err());
        assert!(RgbColor::from_hex("#gg0000").is_err());
    }

    #[test]
    fn hue_of_primaries() {
        assert_eq!(hue_of("#ff0000"), 0);
        assert_eq!(hue_of("#00ff00"), 120);
        assert_eq!(hue_of("#0000ff"), 240);
    }

    #[test]
    fn hue_of_grayscale_is_zero() {
        assert_eq!(hue_of("#ffffff"), 0);
        assert_eq!(hue_of("#808080"), 0);
        assert_eq!(hue_of("#000000"), 0);
    }

    #[test]
    fn hue_of_malformed_is_zero() {
        assert_eq!(hue_of("not-a-color"), 0);
        assert_eq!(hue_of(""), 0);
        assert_eq!(hue_of("#12345"), 0);
        // Two CJK chars are 6 bytes; must be rejected, not byte-sliced.
        assert_eq!(hue_of("蘋果"), 0);
    }

    #[test]
    fn hue_folds_into_positive_range() {
        // Magenta-ish colors produce a negative intermediate hue before folding.
        let hue = hue_of("#ff00ff");
        assert_eq!(hue, 300);
        // Every palette accent must land inside [0, 360).
        for accent in ["#ff9a9e", "#fad0c4", "#a1c4fd", "#c2e9fb", "#6366f1"] {
            assert!(hue_of(accent) < 360);
        }
    }
}
