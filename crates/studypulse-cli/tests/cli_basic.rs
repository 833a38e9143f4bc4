//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::path::PathBuf;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "studypulse-cli", "--"])
        .args(args)
        .env("STUDYPULSE_ENV", "dev")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn fixtures_dir() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../studypulse-core/tests/fixtures")
        .to_string_lossy()
        .to_string()
}

fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_analyze_default_day() {
    let fixtures = fixtures_dir();
    let (stdout, stderr, code) = run_cli(&["analyze", "--models-dir", &fixtures]);
    assert_eq!(code, 0, "analyze failed: {stderr}");
    assert!(stdout.contains("Study: 4h 0m"));
    assert!(stdout.contains("Predicted Performance Score:"));
    assert!(stdout.contains("Burnout Risk Probability: 5.0%"));
    assert!(stdout.contains("Burnout Score: 1.50"));
    assert!(stdout.contains("Burnout Level: Low"));
}

#[test]
fn test_analyze_json() {
    let fixtures = fixtures_dir();
    let (stdout, stderr, code) = run_cli(&[
        "analyze",
        "--models-dir",
        &fixtures,
        "--sleep",
        "1",
        "--study",
        "10",
        "--screen",
        "12",
        "--breaks",
        "10",
        "--mood",
        "1",
        "--json",
    ]);
    assert_eq!(code, 0, "analyze --json failed: {stderr}");
    let report = parse_json(&stdout);
    assert_eq!(report["burnout"]["level"], "Very High");
    assert_eq!(report["burnout_probability"], 0.95);
}

#[test]
fn test_analyze_clamps_out_of_range_input() {
    let fixtures = fixtures_dir();
    let (stdout, _, code) = run_cli(&[
        "analyze",
        "--models-dir",
        &fixtures,
        "--study",
        "25",
        "--mood",
        "-4",
        "--json",
    ]);
    assert_eq!(code, 0);
    let report = parse_json(&stdout);
    assert_eq!(report["features"]["record"]["study_hours"], 10.0);
    assert_eq!(report["features"]["record"]["mood_score"], 1);
}

#[test]
fn test_analyze_missing_models_fails() {
    let dir = std::env::temp_dir().join("studypulse-no-models");
    let (_, stderr, code) = run_cli(&["analyze", "--models-dir", &dir.to_string_lossy()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_features_json() {
    let (stdout, _, code) = run_cli(&["features", "--json"]);
    assert_eq!(code, 0, "features failed");
    let row = parse_json(&stdout);
    assert_eq!(row["focus_score"], 1.0);
    assert_eq!(row["cognitive_load"], 12.0);
}

#[test]
fn test_features_split_hours() {
    let (stdout, _, code) = run_cli(&["features", "--study-h", "6", "--study-m", "30", "--json"]);
    assert_eq!(code, 0);
    let row = parse_json(&stdout);
    assert_eq!(row["study_hours"], 6.5);
}

#[test]
fn test_score_without_models() {
    let (stdout, _, code) = run_cli(&["score", "--sleep", "4"]);
    assert_eq!(code, 0, "score failed");
    assert!(stdout.contains("sleep"));
    assert!(stdout.contains("Burnout Level:"));
}

#[test]
fn test_model_inspect() {
    let fixtures = fixtures_dir();
    let (stdout, _, code) = run_cli(&["model", "inspect", "--models-dir", &fixtures, "--json"]);
    assert_eq!(code, 0, "model inspect failed");
    let models = parse_json(&stdout);
    assert_eq!(models[0]["slot"], "performance");
    assert_eq!(models[1]["kind"], "logistic_regression");
}

#[test]
fn test_config_get() {
    let (stdout, _, code) = run_cli(&["config", "get", "probability.min"]);
    assert_eq!(code, 0);
    assert!(!stdout.trim().is_empty());
}

#[test]
fn test_config_get_unknown_key() {
    let (_, stderr, code) = run_cli(&["config", "get", "no.such.key"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let (_, _, code) = run_cli(&["config", "set", "burnout.bogus", "1"]);
    assert_ne!(code, 0);
}
