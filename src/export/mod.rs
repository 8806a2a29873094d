//! Export functionality: rendering descriptions to documents and packaging
//! them into archives.
//!
//! Renderers are pure string builders over the declarative descriptions, so
//! the rasterizing collaborator (browser, resvg, anything CSS/SVG-aware) is
//! swappable without touching layout or theme logic.

pub mod archive;
pub mod filename;
pub mod html;
pub mod svg;

pub use archive::write_zip;
pub use filename::{card_image_name, cards_zip_name, sanitize, wall_image_name};

/// Output document format for rendered posters and cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Self-contained SVG document.
    Svg,
    /// Standalone HTML page with inline styles.
    Html,
}

impl OutputFormat {
    /// File extension for this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Html => "html",
        }
    }

    /// Renders a poster description in this format.
    #[must_use]
    pub fn render_poster(self, poster: &crate::models::PosterDescription) -> String {
        match self {
            Self::Svg => svg::render_poster(poster),
            Self::Html => html::render_poster(poster),
        }
    }

    /// Renders a card description in this format.
    #[must_use]
    pub fn render_card(self, card: &crate::cards::CardDescription) -> String {
        match self {
            Self::Svg => svg::render_card(card),
            Self::Html => html::render_card(card),
        }
    }
}
