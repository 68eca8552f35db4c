//! The rendercv binary

use crate::support::fixtures::fixture_path;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const TODAY: &str = "2024-06-01";

fn get_rendercv_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rendercv"))
}

/// Run in `dir` with an empty config so no user or project config leaks in.
fn run_rendercv(dir: &Path, args: &[&str]) -> Output {
    let config = dir.join("test-config.yaml");
    if !config.exists() {
        fs::write(&config, "spelling:\n  enabled: false\n").expect("Failed to write config");
    }

    Command::new(get_rendercv_binary())
        .args(args)
        .arg("--config")
        .arg(&config)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run rendercv")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_check_valid_document() {
    let tmp = TempDir::new().unwrap();
    let file = fixture_path("john_doe.yaml");

    let output = run_rendercv(
        tmp.path(),
        &["check", file.to_str().unwrap(), "--today", TODAY],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "✓ John Doe: valid, 0 warning(s)");
}

#[test]
fn test_validate_prints_derived_fields() {
    let tmp = TempDir::new().unwrap();
    let file = fixture_path("john_doe.yaml");

    let output = run_rendercv(
        tmp.path(),
        &["validate", file.to_str().unwrap(), "--today", TODAY],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_yaml::Value = serde_yaml::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["design"]["theme"].as_str(), Some("classic"));
    assert_eq!(
        value["cv"]["education"][0]["date_and_location_strings"][2].as_str(),
        Some("3 years 10 months")
    );
    assert_eq!(value["cv"]["connections"][0]["name"].as_str(), Some("phone"));
}

#[test]
fn test_validate_json_output() {
    let tmp = TempDir::new().unwrap();
    let file = fixture_path("john_doe.json");

    let output = run_rendercv(
        tmp.path(),
        &[
            "validate",
            file.to_str().unwrap(),
            "--today",
            TODAY,
            "--format",
            "json",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["cv"]["test_scores"][0]["details"], "330");
    assert_eq!(
        value["cv"]["work_experience"][0]["end_date"],
        serde_json::json!("present")
    );
}

#[test]
fn test_invalid_document_lists_every_error() {
    let tmp = TempDir::new().unwrap();
    let file = fixture_path("invalid.yaml");

    let output = run_rendercv(
        tmp.path(),
        &["check", file.to_str().unwrap(), "--today", TODAY],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());

    let err = stderr(&output);
    assert!(err.contains("has 8 validation error(s)"), "stderr: {}", err);
    assert!(err.contains("  - cv.education[0].start_date:"));
    assert!(err.contains("  - design.options.primary_color:"));
}

#[test]
fn test_structural_error_fails() {
    let tmp = TempDir::new().unwrap();
    let file = fixture_path("missing_name.yaml");

    let output = run_rendercv(tmp.path(), &["check", file.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("missing_name.yaml"));
}

#[test]
fn test_warnings_go_to_stderr() {
    let tmp = TempDir::new().unwrap();
    let file = fixture_path("conflicting_dates.yaml");

    let output = run_rendercv(
        tmp.path(),
        &["check", file.to_str().unwrap(), "--today", TODAY],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "✓ Jane Roe: valid, 2 warning(s)");
    assert!(stderr(&output).contains(
        "Warning: cv.work_experience[0]: start_date, end_date and date are all provided."
    ));
}

#[test]
fn test_quiet_suppresses_warnings() {
    let tmp = TempDir::new().unwrap();
    let file = fixture_path("conflicting_dates.yaml");

    let output = run_rendercv(
        tmp.path(),
        &["--quiet", "check", file.to_str().unwrap(), "--today", TODAY],
    );
    assert!(output.status.success());
    assert!(!stderr(&output).contains("Warning:"));
}

#[test]
fn test_dictionary_flag_enables_spell_check() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("cv.yaml");
    fs::write(
        &doc,
        "cv:\n  name: Jane Roe\n  certificates:\n    - name: Award\n      highlights:\n        - Led a teem of four\n",
    )
    .unwrap();
    // Spelling is disabled in the config; an explicit dictionary does not turn it back on
    let output = run_rendercv(
        tmp.path(),
        &[
            "check",
            doc.to_str().unwrap(),
            "--dictionary",
            fixture_path("words.txt").to_str().unwrap(),
        ],
    );
    assert!(output.status.success());
    assert!(!stderr(&output).contains("misspelled"));

    fs::write(tmp.path().join("test-config.yaml"), "spelling:\n  allow: [roe]\n").unwrap();
    let output = run_rendercv(
        tmp.path(),
        &[
            "check",
            doc.to_str().unwrap(),
            "--dictionary",
            fixture_path("words.txt").to_str().unwrap(),
        ],
    );
    assert!(output.status.success());
    assert!(stderr(&output)
        .contains("Warning: cv.certificates[0].highlights[0]: The word \"teem\" might be misspelled."));
    assert!(stdout(&output).contains("1 warning(s)"));
}

#[test]
fn test_no_spell_check_flag() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("test-config.yaml"), "").unwrap();
    let doc = tmp.path().join("cv.yaml");
    fs::write(
        &doc,
        "cv:\n  name: Jane Roe\n  certificates:\n    - name: Award\n      highlights:\n        - Qwxyzzt\n",
    )
    .unwrap();

    let output = run_rendercv(
        tmp.path(),
        &[
            "check",
            doc.to_str().unwrap(),
            "--no-spell-check",
            "--dictionary",
            fixture_path("words.txt").to_str().unwrap(),
        ],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "✓ Jane Roe: valid, 0 warning(s)");
}

#[test]
fn test_project_config_is_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("rendercv.yaml"),
        format!(
            "spelling:\n  dictionary: {}\n",
            fixture_path("words.txt").display()
        ),
    )
    .unwrap();
    let doc = tmp.path().join("cv.yaml");
    fs::write(
        &doc,
        "cv:\n  name: Jane Roe\n  certificates:\n    - name: Award\n      highlights:\n        - Led a teem\n",
    )
    .unwrap();

    // no --config: ./rendercv.yaml is used
    let output = Command::new(get_rendercv_binary())
        .args(["check", "cv.yaml"])
        .current_dir(tmp.path())
        .env("NO_COLOR", "1")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("\"teem\""));
}

#[test]
fn test_completions() {
    let tmp = TempDir::new().unwrap();
    let output = Command::new(get_rendercv_binary())
        .args(["completions", "bash"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("rendercv"));
}
