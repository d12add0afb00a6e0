//! The `csslex` binary end to end

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn csslex_cmd() -> Command {
    let mut cmd = Command::cargo_bin("csslex").unwrap();
    // Keep log events off stdout so token lines can be checked exactly
    cmd.env("CSS_LOGGING_ENABLE_CONSOLE", "false");
    cmd
}

fn stylesheet(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_text_output_lists_tokens() {
    let dir = TempDir::new().unwrap();
    let file = stylesheet(&dir, "ok.css", "a/*b*/c");

    csslex_cmd()
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("TEXT@0: \"a\""))
        .stdout(predicate::str::contains("COMMENT@1: \"/*b*/\""))
        .stdout(predicate::str::contains("EOF@7"));
}

#[test]
fn test_json_lines_flatten_token_fields() {
    let dir = TempDir::new().unwrap();
    let file = stylesheet(&dir, "ok.css", "a/*b*/");

    let output = csslex_cmd()
        .args(["--format", "json"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        serde_json::json!({"file": file, "kind": "text", "pos": 0, "value": "a"})
    );
    assert_eq!(lines[1]["kind"], "comment");
    assert_eq!(lines[1]["value"], "/*b*/");
    assert_eq!(lines[2]["kind"], "end_of_stream");
    assert_eq!(lines[2]["pos"], 6);
}

#[test]
fn test_failed_scan_exits_nonzero_with_diagnostic() {
    let dir = TempDir::new().unwrap();
    let file = stylesheet(&dir, "bad.css", "body {}\n/* open");

    csslex_cmd()
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("ERROR@8: \"unclosed comment\""))
        .stderr(predicate::str::contains("error: unclosed comment"))
        .stderr(predicate::str::contains("--> 2:1"))
        .stderr(predicate::str::contains("1 of 1 file(s) failed"));
}

#[test]
fn test_one_bad_file_fails_the_run() {
    let dir = TempDir::new().unwrap();
    let good = stylesheet(&dir, "good.css", "p {}");
    let bad = stylesheet(&dir, "bad.css", "a / b");

    csslex_cmd()
        .args([&good, &bad])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("1 of 2 file(s) failed"));
}

#[test]
fn test_missing_file_is_reported() {
    csslex_cmd()
        .arg("/definitely/not/here.css")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("/definitely/not/here.css"));
}

#[test]
fn test_summary_reports_counts() {
    let dir = TempDir::new().unwrap();
    let file = stylesheet(&dir, "ok.css", "a/*b*/c");

    csslex_cmd()
        .arg("--summary")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 tokens (2 text, 1 comment)"));
}
