//! Flash-card composition: sheet rows -> declarative card descriptions.
//!
//! Mirrors the poster pipeline: pure assembly into a description the
//! rendering collaborators consume. The example sentence is pre-split into
//! highlight segments so renderers never re-parse mark ranges.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::FOOTER_TEXT;
use crate::models::VocabCard;

/// A run of words within an example sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSegment {
    /// Segment text (original spacing within the segment preserved).
    pub text: String,
    /// Whether this run is the marked span.
    pub highlighted: bool,
}

/// A fully-specified flash card, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDescription {
    /// 1-based position within the batch.
    pub index: usize,
    /// Batch size (drives filename padding).
    pub total: usize,
    /// English headword, the card headline.
    pub english: String,
    /// Phonetic transcription.
    pub pronunciation: Option<String>,
    /// Chinese translation of the headword.
    pub translation: Option<String>,
    /// Example sentence split into highlight runs; empty when absent.
    pub example: Vec<ExampleSegment>,
    /// Chinese translation of the example sentence.
    pub example_translation: Option<String>,
    /// Attribution line.
    pub footer: String,
}

/// Composes the description for one card of a batch.
#[must_use]
pub fn compose_card(card: &VocabCard, index: usize, total: usize) -> CardDescription {
    CardDescription {
        index,
        total,
        english: card.english.clone(),
        pronunciation: card.pronunciation.clone(),
        translation: card.translation.clone(),
        example: card
            .example
            .as_deref()
            .map(|example| mark_example(example, card.mark))
            .unwrap_or_default(),
        example_translation: card.example_translation.clone(),
        footer: FOOTER_TEXT.to_string(),
    }
}

/// Splits an example sentence into highlight segments.
///
/// `mark` is a 1-based inclusive word range over the sentence split on
/// single spaces. An out-of-range or inverted range logs a warning and
/// returns the whole sentence unmarked; highlighting is cosmetic and must
/// never abort a card.
#[must_use]
pub fn mark_example(example: &str, mark: Option<(usize, usize)>) -> Vec<ExampleSegment> {
    if example.is_empty() {
        return Vec::new();
    }

    let plain = || vec![ExampleSegment { text: example.to_string(), highlighted: false }];

    let Some((start, end)) = mark else {
        return plain();
    };

    let words: Vec<&str> = example.split(' ').collect();
    if start < 1 || start > end || end > words.len() {
        warn!(start, end, example, "invalid mark range, leaving example unmarked");
        return plain();
    }

    let mut segments = Vec::with_capacity(3);
    if start > 1 {
        segments.push(ExampleSegment {
            text: words[..start - 1].join(" "),
            highlighted: false,
        });
    }
    segments.push(ExampleSegment {
        text: words[start - 1..end].join(" "),
        highlighted: true,
    });
    if end < words.len() {
        segments.push(ExampleSegment {
            text: words[end..].join(" "),
            highlighted: false,
        });
    }
    segments
}
