//! Vocabulary items: word pairs for posters and full flash-card rows.

use serde::{Deserialize, Serialize};

/// One vocabulary entry on a word wall: an English word with an optional
/// Chinese translation.
///
/// Immutable once constructed; `en` is always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    /// English word (trimmed, non-empty).
    pub en: String,
    /// Optional Chinese translation.
    pub cn: Option<String>,
}

impl WordPair {
    /// Creates a pair from raw cell values.
    ///
    /// Returns `None` when the English side is empty after trimming; an empty
    /// Chinese side becomes `None`.
    #[must_use]
    pub fn new(en: &str, cn: &str) -> Option<Self> {
        let en = en.trim();
        if en.is_empty() {
            return None;
        }
        let cn = cn.trim();
        Some(Self {
            en: en.to_string(),
            cn: if cn.is_empty() { None } else { Some(cn.to_string()) },
        })
    }

    /// Parses a word-list file: one pair per line, `english<TAB>chinese`.
    ///
    /// Lines without a tab carry no translation. Blank lines and lines with
    /// an empty English side are skipped.
    #[must_use]
    pub fn parse_word_list(text: &str) -> Vec<Self> {
        text.lines()
            .filter_map(|line| {
                let (en, cn) = line.split_once('\t').unwrap_or((line, ""));
                Self::new(en, cn)
            })
            .collect()
    }
}

/// A full flash-card row from the vocabulary sheet.
///
/// Only `english` is required. `mark` is a 1-based inclusive word range
/// within `example` marking the span to highlight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabCard {
    /// English headword.
    pub english: String,
    /// Phonetic transcription.
    pub pronunciation: Option<String>,
    /// Chinese translation of the headword.
    pub translation: Option<String>,
    /// Example sentence using the headword.
    pub example: Option<String>,
    /// Chinese translation of the example sentence.
    pub example_translation: Option<String>,
    /// 1-based inclusive word range to highlight within `example`.
    pub mark: Option<(usize, usize)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_and_rejects_empty_english() {
        let pair = WordPair::new("  apple ", " 蘋果 ").unwrap();
        assert_eq!(pair.en, "apple");
        assert_eq!(pair.cn.as_deref(), Some("蘋果"));

        assert!(WordPair::new("   ", "蘋果").is_none());
        assert_eq!(WordPair::new("dog", "  ").unwrap().cn, None);
    }

    #[test]
    fn parse_word_list_pairs_by_line() {
        let pairs = WordPair::parse_word_list("apple\t蘋果\nbanana\n\n\t孤兒\ncat\t貓\n");
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].en, "apple");
        assert_eq!(pairs[1], WordPair { en: "banana".into(), cn: None });
        assert_eq!(pairs[2].cn.as_deref(), Some("貓"));
    }
}
