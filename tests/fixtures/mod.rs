//! Shared fixtures for end-to-end CLI tests.

#![allow(dead_code)] // Not every test file uses every helper

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Path to the vocabwall binary.
pub fn vocabwall_bin() -> &'static str {
    env!("CARGO_BIN_EXE_vocabwall")
}

/// Sample sheet export covering both the wall layout (fixed columns) and the
/// card layout (named header columns, including the mark_strat typo).
pub const SAMPLE_CSV: &str = "\
Label,英文,音標,中譯,例句,翻譯,mark_strat,mark_end
unit1,apple,/ˈæpəl/,蘋果,She ate an apple,她吃了一顆蘋果,4,4
unit1,banana,/bəˈnænə/,香蕉,A banana is yellow,香蕉是黃色的,2,2
unit1,watermelon,,西瓜,,,,
unit2,cat,/kæt/,貓,The cat sleeps,貓在睡覺,2,2
";

/// Writes the sample CSV into a temp dir, returning its path and the guard.
pub fn temp_sample_csv() -> (PathBuf, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("sheet.csv");
    fs::write(&path, SAMPLE_CSV).expect("Failed to write sample CSV");
    (path, dir)
}

/// Writes a tab-separated word list into a temp dir.
pub fn temp_word_list(lines: &str) -> (PathBuf, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("words.tsv");
    fs::write(&path, lines).expect("Failed to write word list");
    (path, dir)
}
