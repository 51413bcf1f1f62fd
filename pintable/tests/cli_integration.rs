//! Integration tests for pintable CLI

use std::process::Command;

const FIXTURE: &str = "pintable/tests/fixtures/scores.json";

fn run_pintable(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "pintable", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn json_view(args: &[&str]) -> serde_json::Value {
    let mut all = vec![FIXTURE, "--output", "json"];
    all.extend(args);
    let (stdout, stderr, success) = run_pintable(&all);
    assert!(success, "pintable failed: {stderr}");
    serde_json::from_str(&stdout).expect("Invalid JSON output")
}

fn row_keys(view: &serde_json::Value) -> Vec<String> {
    view["rows"]
        .as_array()
        .expect("rows array")
        .iter()
        .map(|row| row["key"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_pintable(&["--help"]);

    assert!(success);
    assert!(stdout.contains("pintable"));
    assert!(stdout.contains("--click"));
    assert!(stdout.contains("--multiple-sort"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_pintable(&["--version"]);

    assert!(success);
    assert!(stdout.contains("pintable"));
}

#[test]
fn test_table_output() {
    let (stdout, _, success) = run_pintable(&[FIXTURE]);

    assert!(success);
    assert!(stdout.contains("Player"));
    assert!(stdout.contains("Score"));
    assert!(stdout.contains("Mara"));
    assert!(stdout.contains("Tomas"));
}

#[test]
fn test_json_output() {
    let view = json_view(&[]);

    assert_eq!(view["columns"].as_array().map(Vec::len), Some(4));
    assert_eq!(row_keys(&view), vec!["p1", "p2", "p3", "p4"]);
    assert_eq!(view["columns"][0]["fixed"]["edge"], "left");
    assert_eq!(view["columns"][3]["fixed"]["offset"], 0.0);
    assert_eq!(view["viewport"]["scrollX"], true);
}

#[test]
fn test_click_sorts_numerically() {
    let view = json_view(&["--click", "2"]);
    assert_eq!(row_keys(&view), vec!["p4", "p2", "p1", "p3"]);
    assert_eq!(view["columns"][2]["sortOrder"], "ascend");

    let view = json_view(&["--click", "2", "--click", "2"]);
    assert_eq!(row_keys(&view), vec!["p3", "p1", "p2", "p4"]);

    let view = json_view(&["--click", "2", "--click", "2", "--click", "2"]);
    assert_eq!(row_keys(&view), vec!["p1", "p2", "p3", "p4"]);
    assert!(view["columns"][2]["sortOrder"].is_null());
}

#[test]
fn test_single_sort_clears_other_columns() {
    let view = json_view(&["--click", "1", "--click", "2"]);
    assert!(view["columns"][1]["sortOrder"].is_null());
    assert_eq!(view["columns"][2]["sortOrder"], "ascend");

    let view = json_view(&["--multiple-sort", "--click", "1", "--click", "2"]);
    assert_eq!(view["columns"][1]["sortOrder"], "ascend");
    assert_eq!(view["columns"][2]["sortOrder"], "ascend");
}

#[test]
fn test_loading_ignores_clicks() {
    let view = json_view(&["--loading", "--click", "2"]);
    assert_eq!(view["loading"], true);
    assert_eq!(row_keys(&view), vec!["p1", "p2", "p3", "p4"]);
}

#[test]
fn test_expand() {
    let view = json_view(&["--expand", "0"]);
    assert_eq!(view["expanded"], true);

    let view = json_view(&["--expand", "3"]);
    assert_eq!(view["expanded"], false);
}

#[test]
fn test_px_units() {
    let view = json_view(&["--units", "px"]);
    assert_eq!(view["columns"][2]["widthCss"], "90px");
}

#[test]
fn test_invalid_path() {
    let (_, stderr, success) = run_pintable(&["/nonexistent/table.json"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_text_output_mode() {
    let (stdout, _, success) = run_pintable(&[FIXTURE, "--output", "text", "--click", "2"]);

    assert!(success);
    assert!(stdout.contains("Score ▲"));
    assert!(stdout.contains("─┼─"));
    assert!(!stdout.contains('\u{1b}'));
}
