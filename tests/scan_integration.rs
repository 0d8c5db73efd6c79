//! End-to-end tests for the `codesweep` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use codesweep::scanner::report::parse_json;
use codesweep::Severity;

fn codesweep() -> Command {
    Command::cargo_bin("codesweep").expect("binary builds")
}

fn fixture_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("auth.php"),
        "<?php\n$query = \"SELECT * FROM users WHERE id=\" . $_GET['id'];\n$result = mysql_query($query);\n?>\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("buffer.c"),
        "#include <string.h>\nvoid f(char *src) {\n  char dst[8];\n  strcpy(dst, src);\n}\n",
    )
    .unwrap();
    fs::write(dir.path().join("clean.rs"), "fn main() {\n    println!(\"ok\");\n}\n").unwrap();
    fs::write(dir.path().join("README.md"), "# fixture\n").unwrap();
    dir
}

#[test]
fn text_scan_reports_findings_and_exits_zero() {
    let dir = fixture_tree();

    codesweep()
        .args(["scan", "--input"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("SECURITY SCAN REPORT"))
        .stdout(predicate::str::contains("Total files scanned: 3"))
        .stdout(predicate::str::contains("strcpy"))
        .stdout(predicate::str::contains("SEVERITY: HIGH"));
}

#[test]
fn json_scan_written_to_file_parses_back() {
    let dir = fixture_tree();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("report.json");

    codesweep()
        .args(["scan", "--format", "json", "--input"])
        .arg(dir.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved to:"));

    let report = parse_json(&fs::read(&out).unwrap()).unwrap();
    assert_eq!(report.total_files, 3);
    assert_eq!(report.files_skipped, 1); // README.md
    assert!(report.files_with_findings >= 2);
    assert!(report
        .findings
        .iter()
        .any(|f| f.severity == Severity::Critical && f.snippet.contains("strcpy")));

    // Canonical ordering: severities never increase down the list.
    let severities: Vec<Severity> = report.findings.iter().map(|f| f.severity).collect();
    let mut sorted = severities.clone();
    sorted.sort();
    assert_eq!(severities, sorted);
}

#[test]
fn json_scan_to_stdout_is_pure_json() {
    let dir = fixture_tree();

    let assert = codesweep()
        .args(["scan", "--format", "json", "--input"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Scanning:"));

    // stdout must carry nothing but the report document.
    let report = parse_json(&assert.get_output().stdout).unwrap();
    assert_eq!(report.total_files, 3);
    assert!(!report.findings.is_empty());
}

#[test]
fn missing_input_fails_with_an_error() {
    codesweep()
        .args(["scan", "--input", "/no/such/path/anywhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn directory_without_supported_files_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "nothing to see\n").unwrap();

    codesweep()
        .args(["scan", "--input"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no rules available"));
}

#[test]
fn empty_directory_produces_an_empty_report() {
    let dir = TempDir::new().unwrap();

    codesweep()
        .args(["scan", "--input"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files scanned: 0"))
        .stdout(predicate::str::contains("No findings."));
}

#[test]
fn empty_directory_renders_valid_json() {
    let dir = TempDir::new().unwrap();

    let assert = codesweep()
        .args(["scan", "--format", "json", "--input"])
        .arg(dir.path())
        .assert()
        .success();

    let report = parse_json(&assert.get_output().stdout).unwrap();
    assert_eq!(report.total_files, 0);
    assert!(report.findings.is_empty());
    assert!(report.errors.is_empty());
}

#[test]
fn clean_file_yields_zero_findings_but_success() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("lib.rs");
    fs::write(&file, "pub fn add(a: u32, b: u32) -> u32 {\n    a + b\n}\n").unwrap();

    codesweep()
        .args(["scan", "--input"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total findings: 0"));
}

#[test]
fn languages_command_lists_rule_tables() {
    codesweep()
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("c"))
        .stdout(predicate::str::contains("javascript"))
        .stdout(predicate::str::contains("php"))
        .stdout(predicate::str::contains("python"))
        .stdout(predicate::str::contains("rust"))
        .stdout(predicate::str::contains("scala"));
}
