//! Integration tests for the bmi_cli binary.
//!
//! These tests verify end-to-end behavior including:
//! - BMI calculation and input validation
//! - Save/duplicate/delete workflows against a temp database
//! - History listing, JSON output, and CSV export
//! - Empty-state and missing-user handling

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn db_path(dir: &TempDir) -> PathBuf {
    dir.path().join("bmi_history.db")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bmitrack"))
}

/// Save one entry for `user` and assert success
fn save_entry(db: &PathBuf, user: &str, weight: &str) {
    cli()
        .args(["save", weight, "5", "7", "--user", user, "--db"])
        .arg(db)
        .assert()
        .success()
        .stdout(predicate::str::contains("saved"));
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("BMI calculator and history tracker"));
}

#[test]
fn test_calc_prints_bmi_and_classification() {
    // 70 kg at 5 ft 7 in (1.7018 m) -> 24.17, Normal
    cli()
        .args(["calc", "70", "5", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your BMI is 24.17"))
        .stdout(predicate::str::contains("Classification: Normal"));
}

#[test]
fn test_calc_rejects_non_numeric_input() {
    cli()
        .args(["calc", "seventy", "5", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid number"));
}

#[test]
fn test_calc_rejects_zero_height() {
    cli()
        .args(["calc", "70", "0", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("height"));
}

#[test]
fn test_save_requires_user() {
    let temp_dir = setup_test_dir();

    cli()
        .args(["save", "70", "5", "7", "--db"])
        .arg(db_path(&temp_dir))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user selected"));
}

#[test]
fn test_duplicate_save_rejected() {
    let temp_dir = setup_test_dir();
    let db = db_path(&temp_dir);

    save_entry(&db, "alice", "70");

    // Identical (user, weight, height) triple fails the second time
    cli()
        .args(["save", "70", "5", "7", "--user", "alice", "--db"])
        .arg(&db)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_history_empty_is_informational() {
    let temp_dir = setup_test_dir();

    cli()
        .args(["history", "--user", "nobody", "--db"])
        .arg(db_path(&temp_dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("No history found for nobody"));
}

#[test]
fn test_history_lists_entries_in_order() {
    let temp_dir = setup_test_dir();
    let db = db_path(&temp_dir);

    save_entry(&db, "alice", "75");
    save_entry(&db, "alice", "70");

    cli()
        .args(["history", "--user", "alice", "--db"])
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("BMI History for alice"))
        .stdout(predicate::str::contains("1. Weight: 75 kg"))
        .stdout(predicate::str::contains("2. Weight: 70 kg"));
}

#[test]
fn test_history_json_output() {
    let temp_dir = setup_test_dir();
    let db = db_path(&temp_dir);

    save_entry(&db, "alice", "75");
    save_entry(&db, "alice", "70");

    let output = cli()
        .args(["history", "--json", "--user", "alice", "--db"])
        .arg(&db)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records: serde_json::Value =
        serde_json::from_slice(&output).expect("history --json should emit valid JSON");
    let records = records.as_array().expect("expected a JSON array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["user_name"], "alice");
    assert_eq!(records[0]["weight_kg"], 75.0);
}

#[test]
fn test_delete_only_removes_named_user() {
    let temp_dir = setup_test_dir();
    let db = db_path(&temp_dir);

    save_entry(&db, "alice", "70");
    save_entry(&db, "alice", "71");
    save_entry(&db, "alice", "72");
    save_entry(&db, "bob", "80");
    save_entry(&db, "bob", "81");

    cli()
        .args(["delete", "--yes", "--user", "alice", "--db"])
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 3 entries for alice"));

    // Alice is now empty, bob untouched
    cli()
        .args(["history", "--user", "alice", "--db"])
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("No history found for alice"));

    cli()
        .args(["history", "--user", "bob", "--db"])
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Weight: 81 kg"));
}

#[test]
fn test_delete_prompt_can_abort() {
    let temp_dir = setup_test_dir();
    let db = db_path(&temp_dir);

    save_entry(&db, "alice", "70");

    cli()
        .args(["delete", "--user", "alice", "--db"])
        .arg(&db)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted"));

    // Data survives an aborted delete
    cli()
        .args(["history", "--user", "alice", "--db"])
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Weight: 70 kg"));
}

#[test]
fn test_chart_empty_is_informational() {
    let temp_dir = setup_test_dir();

    cli()
        .args(["chart", "--user", "nobody", "--db"])
        .arg(db_path(&temp_dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("No data available to visualize"));
}

#[test]
fn test_chart_renders_trend() {
    let temp_dir = setup_test_dir();
    let db = db_path(&temp_dir);

    save_entry(&db, "alice", "70");
    save_entry(&db, "alice", "75");

    cli()
        .args(["chart", "--user", "alice", "--db"])
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("BMI Trend for alice"))
        .stdout(predicate::str::contains("*"));
}

#[test]
fn test_export_writes_csv() {
    let temp_dir = setup_test_dir();
    let db = db_path(&temp_dir);
    let csv_path = temp_dir.path().join("alice.csv");

    save_entry(&db, "alice", "70");

    cli()
        .args(["export"])
        .arg(&csv_path)
        .args(["--user", "alice", "--db"])
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 entries"));

    let contents = std::fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert!(contents.contains("weight_kg"));
    assert!(contents.contains("alice"));
}

#[test]
fn test_scale_shows_all_classifications() {
    cli()
        .arg("scale")
        .assert()
        .success()
        .stdout(predicate::str::contains("Severe Thinness: < 16"))
        .stdout(predicate::str::contains("Normal: 18.5 - 25"))
        .stdout(predicate::str::contains("Obese Class III: > 40"));
}
