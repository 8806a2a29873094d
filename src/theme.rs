//! Theme palettes for the word wall.
//!
//! Six fixed palettes. `rainbow` and `classic` are dark themes: white text
//! sits directly on hue-tinted cells. The light themes tint accent colors
//! into pastel cell backgrounds and use the accent as the text color, with
//! softer shadow effects.
//!
//! Unknown theme ids resolve to `rainbow` so a poster always renders with
//! some palette.

use serde::{Deserialize, Serialize};

use crate::models::{Effects, GradientSpec};

/// A named fixed visual palette selectable by the end user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Pastel accents on a dark slate gradient.
    Rainbow,
    /// Greens on a mint gradient.
    Nature,
    /// Blues and violets on a sky gradient.
    Ocean,
    /// Pinks on a peach gradient.
    Candy,
    /// Slate grays on a pale blue gradient.
    Tech,
    /// Indigos on a near-black gradient.
    Classic,
}

/// Static palette backing a [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    /// Stable identifier, also the CLI spelling.
    pub id: &'static str,
    /// Background gradient behind the poster grid.
    pub background: GradientSpec,
    /// Accent colors cycled across cells (3-4 entries).
    pub accents: &'static [&'static str],
    /// Primary text color.
    pub text_color: &'static str,
    /// Shadow treatment for light themes.
    pub effects: Option<Effects>,
}

const LIGHT_EFFECTS: Effects = Effects {
    text_shadow: "0 1px 2px rgba(0, 0, 0, 0.1)",
    box_shadow: "0 4px 8px rgba(0, 0, 0, 0.1)",
};

const RAINBOW: ThemePalette = ThemePalette {
    id: "rainbow",
    background: GradientSpec { angle_deg: 135, from: "#2c3e50", to: "#1a252f" },
    accents: &["#ff9a9e", "#fad0c4", "#a1c4fd", "#c2e9fb"],
    text_color: "#ffffff",
    effects: None,
};

const NATURE: ThemePalette = ThemePalette {
    id: "nature",
    background: GradientSpec { angle_deg: 135, from: "#a8e6cf", to: "#dcedc1" },
    accents: &["#3bb78f", "#0bab64", "#2ecc71", "#27ae60"],
    text_color: "#2c3e50",
    effects: Some(LIGHT_EFFECTS),
};

const OCEAN: ThemePalette = ThemePalette {
    id: "ocean",
    background: GradientSpec { angle_deg: 135, from: "#a8d8ea", to: "#aa96da" },
    accents: &["#3498db", "#2980b9", "#6c5ce7", "#4834d4"],
    text_color: "#2c3e50",
    effects: Some(LIGHT_EFFECTS),
};

const CANDY: ThemePalette = ThemePalette {
    id: "candy",
    background: GradientSpec { angle_deg: 135, from: "#ffd3b6", to: "#ffaaa5" },
    accents: &["#ff7675", "#e84393", "#fd79a8"],
    text_color: "#2c3e50",
    effects: Some(LIGHT_EFFECTS),
};

const TECH: ThemePalette = ThemePalette {
    id: "tech",
    background: GradientSpec { angle_deg: 135, from: "#d4e6f1", to: "#a9cce3" },
    accents: &["#2c3e50", "#34495e", "#5d6d7e"],
    text_color: "#17202a",
    effects: Some(Effects {
        text_shadow: "0 1px 1px rgba(255, 255, 255, 0.5)",
        box_shadow: "0 2px 5px rgba(0, 0, 0, 0.15)",
    }),
};

const CLASSIC: ThemePalette = ThemePalette {
    id: "classic",
    background: GradientSpec { angle_deg: 135, from: "#0f172a", to: "#1e293b" },
    accents: &["#6366f1", "#4f46e5", "#4338ca", "#3730a3"],
    text_color: "#ffffff",
    effects: None,
};

impl Theme {
    /// All themes, in presentation order.
    pub const ALL: [Self; 6] = [
        Self::Rainbow,
        Self::Nature,
        Self::Ocean,
        Self::Candy,
        Self::Tech,
        Self::Classic,
    ];

    /// Resolves a theme id, falling back to `rainbow` for anything unknown.
    #[must_use]
    pub fn parse(id: &str) -> Self {
        match id.trim().to_lowercase().as_str() {
            "nature" => Self::Nature,
            "ocean" => Self::Ocean,
            "candy" => Self::Candy,
            "tech" => Self::Tech,
            "classic" => Self::Classic,
            _ => Self::Rainbow,
        }
    }

    /// Stable identifier of the theme.
    #[must_use]
    pub fn id(self) -> &'static str {
        self.palette().id
    }

    /// The palette backing this theme.
    #[must_use]
    pub fn palette(self) -> &'static ThemePalette {
        match self {
            Self::Rainbow => &RAINBOW,
            Self::Nature => &NATURE,
            Self::Ocean => &OCEAN,
            Self::Candy => &CANDY,
            Self::Tech => &TECH,
            Self::Classic => &CLASSIC,
        }
    }

    /// Dark themes keep white text on tinted cells; light themes use the
    /// accent color for text and pastel tints for cell backgrounds.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Rainbow | Self::Classic)
    }
}

/// Looks up a palette by id with the `rainbow` fallback.
#[must_use]
pub fn resolve(theme_id: &str) -> &'static ThemePalette {
    Theme::parse(theme_id).palette()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hue_of;

    #[test]
    fn parse_known_ids() {
        for theme in Theme::ALL {
            assert_eq!(Theme::parse(theme.id()), theme);
        }
        assert_eq!(Theme::parse(" OCEAN "), Theme::Ocean);
    }

    #[test]
    fn unknown_id_falls_back_to_rainbow() {
        assert_eq!(resolve("unknown-theme").id, resolve("rainbow").id);
        assert_eq!(Theme::parse(""), Theme::Rainbow);
    }

    #[test]
    fn palettes_are_well_formed() {
        for theme in Theme::ALL {
            let palette = theme.palette();
            assert!((3..=4).contains(&palette.accents.len()), "{}", palette.id);
            for accent in palette.accents {
                assert!(hue_of(accent) < 360);
                assert!(crate::models::RgbColor::from_hex(accent).is_ok());
            }
        }
    }

    #[test]
    fn dark_themes_have_no_effects() {
        for theme in Theme::ALL {
            assert_eq!(theme.is_dark(), theme.palette().effects.is_none());
            if theme.is_dark() {
                assert_eq!(theme.palette().text_color, "#ffffff");
            }
        }
    }
}
