//! Report rendering in text and JSON form.
//!
//! The JSON form round-trips: a rendered report parsed back with
//! [`parse_json`] compares equal to the original, modulo timestamp
//! precision handled by chrono's serde support.

use std::fmt::Write as _;

use crate::error::Result;
use crate::scanner::model::{Report, Severity};

/// Output encodings for a finished report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Render a report in the requested format, ready to write to a file or
/// stdout.
pub fn render(report: &Report, format: ReportFormat) -> Result<Vec<u8>> {
    match format {
        ReportFormat::Text => Ok(render_text(report).into_bytes()),
        ReportFormat::Json => Ok(serde_json::to_vec_pretty(report)?),
    }
}

/// Parse a JSON report previously produced by [`render`].
pub fn parse_json(data: &[u8]) -> Result<Report> {
    Ok(serde_json::from_slice(data)?)
}

fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let rule = "=".repeat(80);

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "SECURITY SCAN REPORT");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "Generated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "Total files scanned: {}", report.total_files);
    let _ = writeln!(out, "Files with findings: {}", report.files_with_findings);
    let _ = writeln!(out, "Files skipped: {}", report.files_skipped);
    let _ = writeln!(out, "Total findings: {}", report.findings.len());
    let _ = writeln!(out);

    let _ = writeln!(out, "FINDINGS BY SEVERITY:");
    for severity in &Severity::ALL {
        let count = report.severity_counts.get(severity).copied().unwrap_or(0);
        let _ = writeln!(out, "  {}: {}", severity, count);
    }
    let _ = writeln!(out);

    if report.findings.is_empty() {
        let _ = writeln!(out, "No findings.");
    } else {
        let _ = writeln!(out, "{rule}");
        for finding in &report.findings {
            let _ = writeln!(out, "FILE: {}", finding.file.display());
            let _ = writeln!(out, "SEVERITY: {}", finding.severity);
            let _ = writeln!(out, "CATEGORY: {}", finding.category);
            let _ = writeln!(out, "LINE: {}", finding.line);
            let _ = writeln!(out, "DESCRIPTION: {}", finding.message);
            let _ = writeln!(out, "CODE: {}", finding.snippet);
            let _ = writeln!(out, "{}", "-".repeat(50));
        }
    }

    if !report.errors.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "SCAN ERRORS:");
        for error in &report.errors {
            let _ = writeln!(out, "  {}: {}", error.file.display(), error.reason);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::model::{Finding, ScanError};
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn sample_report() -> Report {
        let findings = vec![
            Finding {
                file: PathBuf::from("src/auth.php"),
                line: 14,
                severity: Severity::Critical,
                category: "sql_injection".to_string(),
                message: "SQL query built from request parameters".to_string(),
                snippet: "$db->query(\"SELECT * FROM users WHERE id=$id\");".to_string(),
            },
            Finding {
                file: PathBuf::from("src/util.c"),
                line: 88,
                severity: Severity::High,
                category: "buffer_overflow".to_string(),
                message: "Use of strcpy without bounds checking".to_string(),
                snippet: "strcpy(buf, input);".to_string(),
            },
        ];
        let mut severity_counts: BTreeMap<Severity, usize> =
            Severity::ALL.iter().map(|s| (*s, 0)).collect();
        severity_counts.insert(Severity::Critical, 1);
        severity_counts.insert(Severity::High, 1);

        Report {
            generated_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
            total_files: 5,
            files_with_findings: 2,
            files_skipped: 1,
            severity_counts,
            findings,
            errors: vec![ScanError {
                file: PathBuf::from("src/huge.c"),
                reason: "timeout".to_string(),
            }],
        }
    }

    #[test]
    fn text_report_carries_every_finding_field() {
        let text = String::from_utf8(render(&sample_report(), ReportFormat::Text).unwrap()).unwrap();
        assert!(text.contains("SECURITY SCAN REPORT"));
        assert!(text.contains("Total files scanned: 5"));
        assert!(text.contains("Files with findings: 2"));
        assert!(text.contains("Files skipped: 1"));
        assert!(text.contains("FILE: src/auth.php"));
        assert!(text.contains("SEVERITY: CRITICAL"));
        assert!(text.contains("CATEGORY: sql_injection"));
        assert!(text.contains("LINE: 14"));
        assert!(text.contains("DESCRIPTION: SQL query built from request parameters"));
        assert!(text.contains("CODE: strcpy(buf, input);"));
        assert!(text.contains("SCAN ERRORS:"));
        assert!(text.contains("src/huge.c: timeout"));
    }

    #[test]
    fn severity_tally_lists_all_four_levels() {
        let text = String::from_utf8(render(&sample_report(), ReportFormat::Text).unwrap()).unwrap();
        assert!(text.contains("CRITICAL: 1"));
        assert!(text.contains("HIGH: 1"));
        assert!(text.contains("MEDIUM: 0"));
        assert!(text.contains("LOW: 0"));
    }

    #[test]
    fn json_report_round_trips() {
        let report = sample_report();
        let json = render(&report, ReportFormat::Json).unwrap();
        let parsed = parse_json(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn empty_report_renders_without_findings_section() {
        let report = Report {
            generated_at: Utc::now(),
            total_files: 0,
            files_with_findings: 0,
            files_skipped: 0,
            severity_counts: Severity::ALL.iter().map(|s| (*s, 0)).collect(),
            findings: Vec::new(),
            errors: Vec::new(),
        };
        let text = String::from_utf8(render(&report, ReportFormat::Text).unwrap()).unwrap();
        assert!(text.contains("No findings."));
        assert!(!text.contains("SCAN ERRORS"));
    }
}
