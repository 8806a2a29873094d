//! SVG renderers for posters and flash cards.
//!
//! Output is a single self-contained 1920x1080 document. Box and text
//! shadows are a raster concern and are not reproduced here; the accent bar
//! and tints carry the theme instead.

use std::fmt::Write;

use crate::cards::CardDescription;
use crate::constants::{CELL_GAP, POSTER_PADDING};
use crate::models::PosterDescription;

const ACCENT_BAR_WIDTH: f64 = 3.0;
const CELL_RADIUS: f64 = 6.0;
const FONT_STACK: &str = "'Noto Sans TC', sans-serif";

/// Escapes text for XML content and attribute values.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Renders a poster description as an SVG document.
#[must_use]
pub fn render_poster(poster: &PosterDescription) -> String {
    let width = f64::from(poster.width);
    let height = f64::from(poster.height);
    let cols = poster.grid.cols;
    let gap = f64::from(CELL_GAP);
    let padding = f64::from(POSTER_PADDING);

    let inner_w = width - 2.0 * padding;
    let inner_h = height - 2.0 * padding;
    let cell_w = (inner_w - gap * (cols as f64 - 1.0)) / cols as f64;
    let cell_h = (inner_h - gap * (poster.grid.rows as f64 - 1.0)) / poster.grid.rows as f64;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" font-family=\"{FONT_STACK}\">",
        poster.width, poster.height, poster.width, poster.height
    );

    // 135deg CSS gradient = top-left to bottom-right.
    let _ = writeln!(
        out,
        "  <defs><linearGradient id=\"bg\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">\
<stop offset=\"0%\" stop-color=\"{}\"/><stop offset=\"100%\" stop-color=\"{}\"/>\
</linearGradient></defs>",
        poster.background.from, poster.background.to
    );
    let _ = writeln!(out, "  <rect width=\"{}\" height=\"{}\" fill=\"url(#bg)\"/>", poster.width, poster.height);

    let _ = writeln!(
        out,
        "  <text x=\"{:.1}\" y=\"62\" text-anchor=\"middle\" font-size=\"32\" font-weight=\"bold\" fill=\"{}\">{}</text>",
        width / 2.0,
        poster.text_color,
        escape(&poster.title)
    );

    for (index, cell) in poster.cells.iter().enumerate() {
        let col = index % cols;
        let row = index / cols;
        let x = padding + col as f64 * (cell_w + gap);
        let y = padding + row as f64 * (cell_h + gap);
        let cx = x + cell_w / 2.0;
        let cy = y + cell_h / 2.0;

        let _ = writeln!(
            out,
            "  <g><rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{cell_w:.1}\" height=\"{cell_h:.1}\" rx=\"{CELL_RADIUS}\" fill=\"{}\"/>",
            cell.colors.background
        );
        let _ = writeln!(
            out,
            "  <rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{ACCENT_BAR_WIDTH}\" height=\"{cell_h:.1}\" fill=\"{}\"/>",
            cell.colors.border
        );

        let en_size = cell.font_size_px;
        if let Some(chinese) = &cell.chinese {
            let cn_size = en_size * crate::constants::CHINESE_FONT_RATIO;
            let _ = writeln!(
                out,
                "  <text x=\"{cx:.1}\" y=\"{cy:.1}\" text-anchor=\"middle\" font-size=\"{en_size:.1}\" font-weight=\"600\" fill=\"{}\">{}</text>",
                cell.colors.text,
                escape(&cell.english)
            );
            let _ = writeln!(
                out,
                "  <text x=\"{cx:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"{cn_size:.1}\" opacity=\"0.85\" fill=\"{}\">{}</text>",
                cy + cn_size * 1.3,
                cell.colors.text,
                escape(chinese)
            );
        } else {
            let _ = writeln!(
                out,
                "  <text x=\"{cx:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"{en_size:.1}\" font-weight=\"600\" fill=\"{}\">{}</text>",
                cy + en_size * 0.35,
                cell.colors.text,
                escape(&cell.english)
            );
        }
        let _ = writeln!(out, "  </g>");
    }

    let _ = writeln!(
        out,
        "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"18\" fill=\"{}\">{}</text>",
        width / 2.0,
        height - 30.0,
        poster.footer_color,
        escape(&poster.footer)
    );

    out.push_str("</svg>\n");
    out
}

// Flash-card stage styling. Dark slate stage, fixed regardless of theme.
const STAGE_BG: &str = "#121212";
const CARD_FROM: &str = "#0f172a";
const CARD_TO: &str = "#1e293b";
const HEADLINE_COLOR: &str = "#38bdf8";
const BODY_COLOR: &str = "#e2e8f0";
const LABEL_COLOR: &str = "#64748b";
const EXAMPLE_COLOR: &str = "#cbd5e1";
const EXAMPLE_CN_COLOR: &str = "#94a3b8";
const CARD_FOOTER_COLOR: &str = "rgba(100, 116, 139, 0.5)";
const EXAMPLE_BAR_COLOR: &str = "rgba(59, 130, 246, 0.4)";

/// Renders a flash-card description as an SVG document.
#[must_use]
pub fn render_card(card: &CardDescription) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"1920\" height=\"1080\" viewBox=\"0 0 1920 1080\" font-family=\"{FONT_STACK}\">"
    );
    let _ = writeln!(
        out,
        "  <defs><linearGradient id=\"card\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">\
<stop offset=\"0%\" stop-color=\"{CARD_FROM}\"/><stop offset=\"100%\" stop-color=\"{CARD_TO}\"/>\
</linearGradient></defs>"
    );
    let _ = writeln!(out, "  <rect width=\"1920\" height=\"1080\" fill=\"{STAGE_BG}\"/>");
    let _ = writeln!(
        out,
        "  <rect x=\"38\" y=\"22\" width=\"1844\" height=\"1036\" rx=\"20\" fill=\"url(#card)\"/>"
    );

    let _ = writeln!(
        out,
        "  <text x=\"1840\" y=\"86\" text-anchor=\"end\" font-size=\"24\" letter-spacing=\"1\" fill=\"{CARD_FOOTER_COLOR}\">{}</text>",
        escape(&card.footer)
    );

    let left = 120.0;
    let mut y = 220.0;

    let _ = writeln!(
        out,
        "  <text x=\"{left}\" y=\"{y}\" font-size=\"96\" font-weight=\"bold\" letter-spacing=\"1\" fill=\"{HEADLINE_COLOR}\">{}</text>",
        escape(&card.english)
    );
    y += 50.0;
    let _ = writeln!(
        out,
        "  <line x1=\"{left}\" y1=\"{y}\" x2=\"1800\" y2=\"{y}\" stroke=\"rgba(59, 130, 246, 0.3)\" stroke-width=\"4\"/>"
    );
    y += 120.0;

    for (label, value) in [("音標", &card.pronunciation), ("中譯", &card.translation)] {
        if let Some(value) = value {
            let _ = writeln!(
                out,
                "  <text x=\"{left}\" y=\"{y}\" font-size=\"64\" fill=\"{BODY_COLOR}\">\
<tspan fill=\"{LABEL_COLOR}\" font-size=\"42\">{label}:</tspan>\
<tspan dx=\"40\">{}</tspan></text>",
                escape(value)
            );
            y += 110.0;
        }
    }

    if !card.example.is_empty() {
        let block_top = y - 60.0;
        let _ = writeln!(
            out,
            "  <rect x=\"{left}\" y=\"{block_top}\" width=\"8\" height=\"{}\" fill=\"{EXAMPLE_BAR_COLOR}\"/>",
            if card.example_translation.is_some() { 200 } else { 110 }
        );
        let mut line = format!(
            "  <text x=\"{:.0}\" y=\"{y}\" font-size=\"56\" font-style=\"italic\" fill=\"{EXAMPLE_COLOR}\">",
            left + 45.0
        );
        for (i, segment) in card.example.iter().enumerate() {
            let text = if i == 0 { escape(&segment.text) } else { format!(" {}", escape(&segment.text)) };
            if segment.highlighted {
                let _ = write!(
                    line,
                    "<tspan fill=\"{HEADLINE_COLOR}\" font-weight=\"bold\">{text}</tspan>"
                );
            } else {
                let _ = write!(line, "{text}");
            }
        }
        line.push_str("</text>");
        let _ = writeln!(out, "{line}");
        y += 95.0;

        if let Some(translation) = &card.example_translation {
            let _ = writeln!(
                out,
                "  <text x=\"{:.0}\" y=\"{y}\" font-size=\"52\" opacity=\"0.85\" fill=\"{EXAMPLE_CN_COLOR}\">{}</text>",
                left + 45.0,
                escape(translation)
            );
        }
    }

    let _ = writeln!(
        out,
        "  <text x=\"960\" y=\"1020\" text-anchor=\"middle\" font-size=\"28\" fill=\"{LABEL_COLOR}\">{} / {}</text>",
        card.index, card.total
    );

    out.push_str("</svg>\n");
    out
}
