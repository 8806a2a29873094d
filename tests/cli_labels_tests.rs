//! End-to-end tests for `vocabwall labels`.

use std::process::Command;

mod fixtures;
use fixtures::*;

#[test]
fn labels_lists_unique_sorted_labels() {
    let (csv_path, _guard) = temp_sample_csv();

    let output = Command::new(vocabwall_bin())
        .args(["labels", "--csv", csv_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "labels should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "unit1\nunit2\n");
}

#[test]
fn labels_with_missing_csv_fails_with_io_exit_code() {
    let output = Command::new(vocabwall_bin())
        .args(["labels", "--csv", "/nonexistent/sheet.csv"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
}

#[test]
fn csv_flag_conflicts_with_sheet_id() {
    let (csv_path, _guard) = temp_sample_csv();

    let output = Command::new(vocabwall_bin())
        .args([
            "labels",
            "--csv",
            csv_path.to_str().unwrap(),
            "--sheet-id",
            "abc123",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot be used with"));
}
