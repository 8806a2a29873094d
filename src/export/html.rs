//! HTML renderers for posters and flash cards.
//!
//! Standalone pages with fully inline styles, sized to the 1920x1080
//! canvas. Any DOM-based rasterizer can capture them as-is.

use std::fmt::Write;

use crate::cards::CardDescription;
use crate::constants::{CELL_GAP, CHINESE_FONT_RATIO, POSTER_PADDING};
use crate::models::PosterDescription;

/// Escapes text for HTML content.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn page_open(out: &mut String, title: &str) {
    let _ = writeln!(
        out,
        "<!DOCTYPE html>\n<html lang=\"zh-Hant\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body style=\"margin: 0; font-family: 'Noto Sans TC', sans-serif;\">",
        escape(title)
    );
}

/// Renders a poster description as a standalone HTML page.
#[must_use]
pub fn render_poster(poster: &PosterDescription) -> String {
    let mut out = String::new();
    page_open(&mut out, &poster.title);

    let _ = writeln!(
        out,
        "<div style=\"position: relative; width: {}px; height: {}px; display: grid; padding: {}px; box-sizing: border-box; place-items: center; gap: {}px; background: {}; grid-template-columns: repeat({}, 1fr); grid-template-rows: repeat({}, 1fr);\">",
        poster.width,
        poster.height,
        POSTER_PADDING,
        CELL_GAP,
        poster.background.css(),
        poster.grid.cols,
        poster.grid.rows
    );

    let _ = writeln!(
        out,
        "<div style=\"position: absolute; top: 30px; left: 0; right: 0; text-align: center; color: {}; font-size: 32px; font-weight: bold; text-shadow: 0 2px 4px rgba(0, 0, 0, 0.5); z-index: 1;\">{}</div>",
        poster.text_color,
        escape(&poster.title)
    );

    for cell in &poster.cells {
        let _ = writeln!(
            out,
            "<div style=\"background-color: {}; border-left: 3px solid {}; box-shadow: {}; text-shadow: {}; border-radius: 6px; padding: 15px 20px; text-align: center; overflow: hidden; min-height: 60px; letter-spacing: 0.5px; width: 100%; display: flex; flex-direction: column; justify-content: center;\">",
            cell.colors.background, cell.colors.border, cell.colors.box_shadow, cell.colors.text_shadow
        );
        let _ = writeln!(
            out,
            "  <div style=\"font-size: {:.1}px; font-weight: 600; color: {};\">{}</div>",
            cell.font_size_px,
            cell.colors.text,
            escape(&cell.english)
        );
        if let Some(chinese) = &cell.chinese {
            let _ = writeln!(
                out,
                "  <div style=\"font-size: {:.1}px; color: {}; opacity: 0.85; margin-top: 4px; line-height: 1.3;\">{}</div>",
                cell.font_size_px * CHINESE_FONT_RATIO,
                cell.colors.text,
                escape(chinese)
            );
        }
        let _ = writeln!(out, "</div>");
    }

    let _ = writeln!(
        out,
        "<div style=\"position: absolute; bottom: 30px; left: 0; right: 0; text-align: center; color: {}; font-size: 18px; z-index: 1;\">{}</div>",
        poster.footer_color,
        escape(&poster.footer)
    );

    out.push_str("</div>\n</body>\n</html>\n");
    out
}

/// Renders a flash-card description as a standalone HTML page.
#[must_use]
pub fn render_card(card: &CardDescription) -> String {
    let mut out = String::new();
    page_open(&mut out, &card.english);

    let _ = writeln!(
        out,
        "<div style=\"width: 1920px; height: 1080px; background-color: #121212; display: flex; align-items: center; justify-content: center; overflow: hidden;\">"
    );
    let _ = writeln!(
        out,
        "<div style=\"position: relative; width: 96%; height: 96%; padding: 60px; box-sizing: border-box; border-radius: 20px; background: linear-gradient(to bottom right, #0f172a, #1e293b); color: #e2e8f0; display: flex; flex-direction: column;\">"
    );

    let _ = writeln!(
        out,
        "<div style=\"position: absolute; top: 40px; right: 40px; font-size: 24px; color: rgba(100, 116, 139, 0.5); letter-spacing: 1px;\">{}</div>",
        escape(&card.footer)
    );

    let _ = writeln!(
        out,
        "<h3 style=\"font-size: 96px; color: #38bdf8; border-bottom: 4px solid rgba(59, 130, 246, 0.3); padding-bottom: 15px; margin: 0 0 15px; font-weight: bold; letter-spacing: 1px;\">{}</h3>",
        escape(&card.english)
    );

    for (label, value) in [("音標", &card.pronunciation), ("中譯", &card.translation)] {
        if let Some(value) = value {
            let _ = writeln!(
                out,
                "<div style=\"margin: 8px 0; font-size: 64px;\"><strong style=\"color: #64748b; font-weight: 500; display: inline-block; width: 180px; opacity: 0.75; font-size: 42px;\">{label}:</strong> {}</div>",
                escape(value)
            );
        }
    }

    if !card.example.is_empty() {
        let _ = writeln!(
            out,
            "<div style=\"margin: 15px 0; padding: 25px; border-left: 8px solid rgba(59, 130, 246, 0.4); border-radius: 0 15px 15px 0; background-color: rgba(15, 23, 42, 0.7);\">"
        );
        let mut sentence = String::from(
            "  <div style=\"font-size: 56px; line-height: 1.4; margin-bottom: 15px; font-style: italic; color: #cbd5e1;\">",
        );
        for (i, segment) in card.example.iter().enumerate() {
            if i > 0 {
                sentence.push(' ');
            }
            if segment.highlighted {
                let _ = write!(
                    sentence,
                    "<span style=\"background-color: rgba(14, 165, 233, 0.2); color: #38bdf8; padding: 0 8px; border-radius: 6px; font-weight: bold;\">{}</span>",
                    escape(&segment.text)
                );
            } else {
                sentence.push_str(&escape(&segment.text));
            }
        }
        sentence.push_str("</div>");
        let _ = writeln!(out, "{sentence}");

        if let Some(translation) = &card.example_translation {
            let _ = writeln!(
                out,
                "  <div style=\"font-size: 52px; color: #94a3b8; font-weight: 500; opacity: 0.85;\">{}</div>",
                escape(translation)
            );
        }
        let _ = writeln!(out, "</div>");
    }

    out.push_str("</div>\n</div>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::compose_card;
    use crate::models::{VocabCard, WordPair};
    use crate::poster::compose;
    use crate::theme::Theme;

    #[test]
    fn poster_html_reproduces_grid_template() {
        let pairs: Vec<WordPair> = (0..9)
            .map(|i| WordPair { en: format!("word{i}"), cn: None })
            .collect();
        let html = render_poster(&compose(&pairs, "unit2", Theme::Candy));
        assert!(html.contains("grid-template-columns: repeat(4, 1fr)"));
        assert!(html.contains("grid-template-rows: repeat(3, 1fr)"));
        assert!(html.contains("UNIT2 - 單字牆"));
        assert_eq!(html.matches("border-left: 3px solid").count(), 9);
    }

    #[test]
    fn card_html_wraps_highlight_in_span() {
        let vocab = VocabCard {
            english: "bark".into(),
            example: Some("Dogs bark loudly".into()),
            mark: Some((2, 2)),
            ..VocabCard::default()
        };
        let html = render_card(&compose_card(&vocab, 1, 1));
        assert!(html.contains("font-weight: bold;\">bark</span>"));
        assert!(html.contains("Dogs"));
        assert!(html.contains("loudly"));
    }

    #[test]
    fn card_html_omits_empty_sections() {
        let html = render_card(&compose_card(
            &VocabCard { english: "plain".into(), ..VocabCard::default() },
            1,
            1,
        ));
        assert!(!html.contains("音標"));
        assert!(!html.contains("border-left: 8px"));
    }
}
