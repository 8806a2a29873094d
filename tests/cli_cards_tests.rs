//! End-to-end tests for `vocabwall cards`.

use std::fs;
use std::io::Read;
use std::process::Command;

mod fixtures;
use fixtures::*;

#[test]
fn cards_renders_documents_and_zip() {
    let (csv_path, _csv_guard) = temp_sample_csv();
    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = Command::new(vocabwall_bin())
        .args([
            "cards",
            "--csv",
            csv_path.to_str().unwrap(),
            "--label",
            "unit1",
            "--output",
            out_dir.path().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "cards should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let first = fs::read_to_string(out_dir.path().join("#01_apple.svg"))
        .expect("First card SVG should exist");
    assert!(first.contains("apple"));
    assert!(first.contains("/ˈæpəl/"));
    assert!(first.contains("1 / 3"));
    assert!(out_dir.path().join("#02_banana.svg").exists());
    assert!(out_dir.path().join("#03_watermelon.svg").exists());

    let zip_path = out_dir.path().join("VocabExport_unit1_Cards.zip");
    let file = fs::File::open(&zip_path).expect("ZIP archive should exist");
    let mut archive = zip::ZipArchive::new(file).expect("ZIP should be readable");
    assert_eq!(archive.len(), 3);

    let mut entry = archive
        .by_name("#02_banana.svg")
        .expect("Entry should be present under the card filename");
    let mut contents = String::new();
    entry
        .read_to_string(&mut contents)
        .expect("Entry should decompress");
    assert!(contents.contains("banana"));
}

#[test]
fn cards_marks_the_example_word_range() {
    let (csv_path, _csv_guard) = temp_sample_csv();
    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = Command::new(vocabwall_bin())
        .args([
            "cards",
            "--csv",
            csv_path.to_str().unwrap(),
            "--label",
            "unit1",
            "--no-zip",
            "--output",
            out_dir.path().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // "She ate an apple" with mark 4..=4 highlights the word "apple".
    let svg = fs::read_to_string(out_dir.path().join("#01_apple.svg"))
        .expect("Card SVG should exist");
    assert!(svg.contains("font-weight=\"bold\""));
    assert!(!out_dir.path().join("VocabExport_unit1_Cards.zip").exists());
}

#[test]
fn cards_renders_html_format() {
    let (csv_path, _csv_guard) = temp_sample_csv();
    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = Command::new(vocabwall_bin())
        .args([
            "cards",
            "--csv",
            csv_path.to_str().unwrap(),
            "--label",
            "unit2",
            "--format",
            "html",
            "--output",
            out_dir.path().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let html = fs::read_to_string(out_dir.path().join("#01_cat.html"))
        .expect("Card HTML should exist");
    assert!(html.contains("cat"));
    assert!(html.contains("音標"));
    assert!(out_dir.path().join("VocabExport_unit2_Cards.zip").exists());
}

#[test]
fn cards_rejects_an_unknown_label() {
    let (csv_path, _csv_guard) = temp_sample_csv();
    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = Command::new(vocabwall_bin())
        .args([
            "cards",
            "--csv",
            csv_path.to_str().unwrap(),
            "--label",
            "unit99",
            "--output",
            out_dir.path().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unit99"));
}
