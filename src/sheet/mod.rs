//! Google Sheet ingestion: CSV fetch, row parsing, and vocabulary extraction.
//!
//! The sheet is published read-only; its CSV export endpoint needs no auth.
//! Parsing is headerless and flexible so ragged rows survive. Two extraction
//! paths exist, matching how the sheet is actually laid out:
//!
//! - the word-wall path uses fixed columns (label, English, _, Chinese),
//! - the flash-card path resolves columns from the header row by name,
//!   accepting both Chinese and English spellings.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, warn};

use crate::models::{VocabCard, WordPair};

/// English word column in the wall layout (after the label column).
const WALL_EN_COLUMN: usize = 1;
/// Chinese translation column in the wall layout.
const WALL_CN_COLUMN: usize = 3;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Identifies one published spreadsheet tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSource {
    /// Spreadsheet document id (the long token in the sheet URL).
    pub spreadsheet_id: String,
    /// Tab id within the document.
    pub gid: String,
}

impl SheetSource {
    /// CSV export endpoint for this tab.
    #[must_use]
    pub fn export_url(&self) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}/export?format=csv&gid={}",
            self.spreadsheet_id, self.gid
        )
    }

    /// Fetches the tab as CSV text.
    ///
    /// # Errors
    ///
    /// Fails on network errors, non-success status codes, and empty bodies;
    /// the messages name the sheet so the user can check its sharing state.
    pub fn fetch_csv(&self) -> Result<String> {
        let url = self.export_url();
        debug!(%url, "fetching sheet CSV");

        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        let response = client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to reach Google Sheets at {url}"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!(
                "Sheet download failed (HTTP {status}). Check the spreadsheet id and that the sheet is shared publicly."
            );
        }

        let body = response.text().context("Failed to read sheet response body")?;
        if body.trim().is_empty() {
            anyhow::bail!("Sheet returned an empty CSV body. Check the tab gid and sheet contents.");
        }
        Ok(body)
    }
}

/// Parses CSV text into raw rows.
///
/// Headerless and flexible: rows may have differing lengths, and the header
/// row (if any) comes back as `rows[0]` for the callers to interpret.
pub fn parse_rows(csv_text: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("Failed to parse CSV record")?;
        rows.push(record.iter().map(ToString::to_string).collect());
    }
    if rows.is_empty() {
        anyhow::bail!("Parsed sheet contains no rows.");
    }
    Ok(rows)
}

/// Finds a header column whose trimmed, lowercased name matches any alias.
fn find_column(header: &[String], names: &[&str]) -> Option<usize> {
    header
        .iter()
        .position(|cell| names.contains(&cell.trim().to_lowercase().as_str()))
}

fn cell<'a>(row: &'a [String], index: usize) -> &'a str {
    row.get(index).map_or("", |c| c.trim())
}

/// Collects the unique labels present in the sheet, sorted.
///
/// Prefers a `Label` header column; without one, falls back to column 0
/// with a warning (older sheets carried no header).
#[must_use]
pub fn unique_labels(rows: &[Vec<String>]) -> Vec<String> {
    let header = &rows[0];
    let label_col = find_column(header, &["label"]).unwrap_or_else(|| {
        warn!("no 'Label' header column found, falling back to column 0");
        0
    });

    let labels: BTreeSet<String> = rows[1..]
        .iter()
        .map(|row| cell(row, label_col).to_string())
        .filter(|label| !label.is_empty())
        .collect();
    labels.into_iter().collect()
}

/// Extracts word pairs for a wall poster under `label`.
///
/// Wall rows use fixed positions: label in column 0, English in column 1,
/// Chinese in column 3. The label comparison is case-insensitive.
///
/// # Errors
///
/// Fails when no row carries the label, or when the matching rows contain
/// no usable English words.
pub fn wall_pairs(rows: &[Vec<String>], label: &str) -> Result<Vec<WordPair>> {
    let wanted = label.trim().to_lowercase();
    let matching: Vec<&Vec<String>> = rows
        .iter()
        .filter(|row| cell(row, 0).to_lowercase() == wanted)
        .collect();

    if matching.is_empty() {
        anyhow::bail!(
            "No rows found for label \"{label}\" (column 0). Check the label spelling against `{} labels`.",
            crate::constants::APP_BINARY_NAME
        );
    }

    let pairs: Vec<WordPair> = matching
        .iter()
        .filter_map(|row| WordPair::new(cell(row, WALL_EN_COLUMN), cell(row, WALL_CN_COLUMN)))
        .collect();

    if pairs.is_empty() {
        anyhow::bail!("Label \"{label}\" has rows but no valid English words (column 1).");
    }
    Ok(pairs)
}

/// Extracts flash cards for `label`, resolving columns from the header row.
///
/// Column aliases (case-insensitive): `label`; `英文`/`english` (required);
/// `音標`/`pronunciation`; `中譯`/`translation`; `例句`/`example`;
/// `翻譯`/`exampletranslation`; `mark_start`/`mark_strat` (a long-lived typo
/// in production sheets); `mark_end`.
///
/// # Errors
///
/// Fails without a `Label` or English column, when no row carries the label,
/// or when the matching rows contain no usable English words.
pub fn cards(rows: &[Vec<String>], label: &str) -> Result<Vec<VocabCard>> {
    let header = &rows[0];
    let label_col = find_column(header, &["label"])
        .context("Sheet has no \"Label\" column. The first row must contain a Label header.")?;
    let english_col = find_column(header, &["英文", "english"])
        .context("Sheet has no \"英文\"/\"English\" column.")?;

    let pronunciation_col = find_column(header, &["音標", "pronunciation"]);
    let translation_col = find_column(header, &["中譯", "translation"]);
    let example_col = find_column(header, &["例句", "example"]);
    let example_translation_col = find_column(header, &["翻譯", "exampletranslation"]);
    let mark_start_col = find_column(header, &["mark_start", "mark_strat"]);
    let mark_end_col = find_column(header, &["mark_end"]);

    let wanted = label.trim().to_lowercase();
    let matching: Vec<&Vec<String>> = rows[1..]
        .iter()
        .filter(|row| cell(row, label_col).to_lowercase() == wanted)
        .collect();

    if matching.is_empty() {
        anyhow::bail!("No rows found for label \"{label}\" in the Label column.");
    }

    let optional = |row: &[String], col: Option<usize>| -> Option<String> {
        let text = col.map(|c| cell(row, c))?;
        (!text.is_empty()).then(|| text.to_string())
    };

    let cards: Vec<VocabCard> = matching
        .iter()
        .filter_map(|row| {
            let english = cell(row, english_col);
            if english.is_empty() {
                return None;
            }
            let mark_start = optional(row, mark_start_col).and_then(|v| v.parse::<usize>().ok());
            let mark_end = optional(row, mark_end_col).and_then(|v| v.parse::<usize>().ok());
            Some(VocabCard {
                english: english.to_string(),
                pronunciation: optional(row, pronunciation_col),
                translation: optional(row, translation_col),
                example: optional(row, example_col),
                example_translation: optional(row, example_translation_col),
                mark: mark_start.zip(mark_end),
            })
        })
        .collect();

    if cards.is_empty() {
        anyhow::bail!("Label \"{label}\" has rows but no valid English words.");
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(csv: &str) -> Vec<Vec<String>> {
        parse_rows(csv).unwrap()
    }

    const WALL_CSV: &str = "\
Label,English,Pronunciation,Translation
unit1,apple,/ˈæpəl/,蘋果
unit1,banana,,香蕉
unit2,cat,/kæt/,貓
unit1,,,孤兒
";

    #[test]
    fn export_url_shape() {
        let source = SheetSource { spreadsheet_id: "abc123".into(), gid: "42".into() };
        assert_eq!(
            source.export_url(),
            "https://docs.google.com/spreadsheets/d/abc123/export?format=csv&gid=42"
        );
    }

    #[test]
    fn parse_rows_tolerates_ragged_rows() {
        let parsed = rows("a,b,c\nd\ne,f\n");
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[1], vec!["d".to_string()]);
    }

    #[test]
    fn parse_rows_rejects_empty_input() {
        assert!(parse_rows("").is_err());
    }

    #[test]
    fn unique_labels_are_sorted_and_deduped() {
        assert_eq!(unique_labels(&rows(WALL_CSV)), vec!["unit1", "unit2"]);
    }

    #[test]
    fn unique_labels_fall_back_to_first_column() {
        let csv = "z9,apple\na1,bird\nz9,cat\n";
        assert_eq!(unique_labels(&rows(csv)), vec!["a1", "z9"]);
    }

    #[test]
    fn wall_pairs_filter_by_label_and_fixed_columns() {
        let pairs = wall_pairs(&rows(WALL_CSV), "UNIT1").unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], WordPair { en: "apple".into(), cn: Some("蘋果".into()) });
        assert_eq!(pairs[1], WordPair { en: "banana".into(), cn: Some("香蕉".into()) });
    }

    #[test]
    fn wall_pairs_errors_on_unknown_label() {
        let err = wall_pairs(&rows(WALL_CSV), "unit9").unwrap_err();
        assert!(err.to_string().contains("unit9"));
    }

    #[test]
    fn wall_pairs_errors_when_no_english_words() {
        let csv = "unit1,,x,只有中文\n";
        assert!(wall_pairs(&rows(csv), "unit1").is_err());
    }

    const CARD_CSV: &str = "\
Label,英文,音標,中譯,例句,翻譯,mark_strat,mark_end
u1,resilient,/rɪˈzɪliənt/,有韌性的,She is very resilient,她很有韌性,4,4
u1,terse,,,A terse reply,,2,2
u2,other,,,,,,
u1,,,,,,,
";

    #[test]
    fn cards_resolve_columns_by_alias_including_typo() {
        let cards = cards(&rows(CARD_CSV), "u1").unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].english, "resilient");
        assert_eq!(cards[0].pronunciation.as_deref(), Some("/rɪˈzɪliənt/"));
        assert_eq!(cards[0].mark, Some((4, 4)));
        assert_eq!(cards[1].english, "terse");
        assert_eq!(cards[1].pronunciation, None);
    }

    #[test]
    fn cards_require_label_and_english_columns() {
        assert!(cards(&rows("英文\nword\n"), "x").is_err());
        assert!(cards(&rows("Label,Word\nu1,a\n"), "u1").is_err());
    }

    #[test]
    fn cards_accept_english_header_aliases() {
        let csv = "label,ENGLISH,Translation\nu1,dog,狗\n";
        let parsed = cards(&rows(csv), "u1").unwrap();
        assert_eq!(parsed[0].english, "dog");
        assert_eq!(parsed[0].translation.as_deref(), Some("狗"));
        assert_eq!(parsed[0].mark, None);
    }
}
