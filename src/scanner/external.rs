//! Optional external tool collaborators.
//!
//! Compilers and linters can contribute extra findings through the same
//! `Finding` contract as the pattern engine. They are strictly best-effort:
//! a missing binary or an expired timeout degrades to a single informational
//! finding and never fails or stalls the scan. Each tool runs with its own
//! deadline, shorter than the overall scan deadline.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::scanner::model::{Finding, Severity};

/// An external diagnostic tool that can be run against a single file.
pub trait DiagnosticTool: Send + Sync {
    fn name(&self) -> &'static str;

    /// Language keys this tool applies to.
    fn supports(&self, language: &str) -> bool;

    /// The command to run for one file.
    fn command(&self, file: &Path) -> Command;

    /// Turn captured stdout+stderr into findings.
    fn parse_diagnostics(&self, file: &Path, output: &str) -> Vec<Finding>;
}

/// The built-in tool set: `gcc -fsyntax-only` for C and `php -l` for PHP.
pub fn default_tools() -> Vec<Box<dyn DiagnosticTool>> {
    vec![Box::new(GccSyntaxCheck), Box::new(PhpLintCheck)]
}

/// Run every applicable tool against one file, collecting whatever findings
/// they produce. Failures degrade to informational findings.
pub fn run_tools(
    tools: &[Box<dyn DiagnosticTool>],
    language: &str,
    file: &Path,
    timeout: Duration,
) -> Vec<Finding> {
    tools
        .iter()
        .filter(|tool| tool.supports(language))
        .flat_map(|tool| run_tool(tool.as_ref(), file, timeout))
        .collect()
}

fn run_tool(tool: &dyn DiagnosticTool, file: &Path, timeout: Duration) -> Vec<Finding> {
    let mut command = tool.command(file);
    command.stdout(Stdio::piped()).stderr(Stdio::piped());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) => {
            debug!("{} unavailable for {}: {}", tool.name(), file.display(), e);
            return vec![tool_note(
                file,
                format!("{} not available - check skipped", tool.name()),
            )];
        }
    };

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(_)) => break,
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    warn!("{} timed out on {}", tool.name(), file.display());
                    return vec![tool_note(
                        file,
                        format!("{} timed out after {}s", tool.name(), timeout.as_secs()),
                    )];
                }
                thread::sleep(Duration::from_millis(20));
            }
            Err(e) => {
                warn!("{} failed on {}: {}", tool.name(), file.display(), e);
                return vec![tool_note(file, format!("{} failed: {}", tool.name(), e))];
            }
        }
    }

    let mut output = String::new();
    if let Some(mut stdout) = child.stdout.take() {
        let _ = stdout.read_to_string(&mut output);
    }
    if let Some(mut stderr) = child.stderr.take() {
        let _ = stderr.read_to_string(&mut output);
    }
    tool.parse_diagnostics(file, &output)
}

fn tool_note(file: &Path, message: String) -> Finding {
    Finding {
        file: file.to_path_buf(),
        line: 1,
        severity: Severity::Low,
        category: "external_tool".to_string(),
        message,
        snippet: String::new(),
    }
}

/// Syntax check for C files via `gcc -fsyntax-only`.
pub struct GccSyntaxCheck;

static GCC_DIAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[^:\n]+:(\d+):(?:\d+:)?\s*(warning|error):\s*(.+)$")
        .expect("gcc diagnostic pattern is valid")
});

impl DiagnosticTool for GccSyntaxCheck {
    fn name(&self) -> &'static str {
        "gcc"
    }

    fn supports(&self, language: &str) -> bool {
        language == "c"
    }

    fn command(&self, file: &Path) -> Command {
        let mut cmd = Command::new("gcc");
        cmd.args(["-fsyntax-only", "-Wall", "-Wextra", "-std=c99"]).arg(file);
        cmd
    }

    fn parse_diagnostics(&self, file: &Path, output: &str) -> Vec<Finding> {
        GCC_DIAG
            .captures_iter(output)
            .filter_map(|caps| {
                let line: usize = caps[1].parse().ok()?;
                let severity = if &caps[2] == "error" {
                    Severity::High
                } else {
                    Severity::Medium
                };
                Some(Finding {
                    file: file.to_path_buf(),
                    line: line.max(1),
                    severity,
                    category: "compiler_diagnostic".to_string(),
                    message: caps[3].trim().to_string(),
                    snippet: String::new(),
                })
            })
            .collect()
    }
}

/// Syntax check for PHP files via `php -l`.
pub struct PhpLintCheck;

static PHP_DIAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?:PHP\s+)?(?:Parse|Fatal) error:\s*(.+?) in .+ on line (\d+)")
        .expect("php diagnostic pattern is valid")
});

impl DiagnosticTool for PhpLintCheck {
    fn name(&self) -> &'static str {
        "php"
    }

    fn supports(&self, language: &str) -> bool {
        language == "php"
    }

    fn command(&self, file: &Path) -> Command {
        let mut cmd = Command::new("php");
        cmd.arg("-l").arg(file);
        cmd
    }

    fn parse_diagnostics(&self, file: &Path, output: &str) -> Vec<Finding> {
        PHP_DIAG
            .captures_iter(output)
            .filter_map(|caps| {
                let line: usize = caps[2].parse().ok()?;
                Some(Finding {
                    file: file.to_path_buf(),
                    line: line.max(1),
                    severity: Severity::High,
                    category: "syntax_error".to_string(),
                    message: caps[1].trim().to_string(),
                    snippet: String::new(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn gcc_diagnostics_are_parsed_into_findings() {
        let output = "\
vuln.c:12:5: warning: implicit declaration of function 'foo' [-Wimplicit-function-declaration]
vuln.c:30:1: error: expected ';' before '}' token
";
        let findings = GccSyntaxCheck.parse_diagnostics(&PathBuf::from("vuln.c"), output);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].line, 12);
        assert_eq!(findings[0].severity, Severity::Medium);
        assert_eq!(findings[1].line, 30);
        assert_eq!(findings[1].severity, Severity::High);
        assert_eq!(findings[1].category, "compiler_diagnostic");
    }

    #[test]
    fn php_lint_errors_are_parsed() {
        let output = "PHP Parse error: syntax error, unexpected '}' in bad.php on line 7\n";
        let findings = PhpLintCheck.parse_diagnostics(&PathBuf::from("bad.php"), output);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 7);
        assert_eq!(findings[0].category, "syntax_error");
    }

    #[test]
    fn missing_binary_degrades_to_one_informational_finding() {
        struct MissingTool;
        impl DiagnosticTool for MissingTool {
            fn name(&self) -> &'static str {
                "missing-tool"
            }
            fn supports(&self, _language: &str) -> bool {
                true
            }
            fn command(&self, file: &Path) -> Command {
                let mut cmd = Command::new("codesweep-definitely-not-installed");
                cmd.arg(file);
                cmd
            }
            fn parse_diagnostics(&self, _file: &Path, _output: &str) -> Vec<Finding> {
                Vec::new()
            }
        }

        let findings = run_tool(
            &MissingTool,
            &PathBuf::from("a.c"),
            Duration::from_secs(1),
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Low);
        assert_eq!(findings[0].category, "external_tool");
    }

    #[test]
    fn clean_output_produces_no_findings() {
        assert!(GccSyntaxCheck
            .parse_diagnostics(&PathBuf::from("ok.c"), "")
            .is_empty());
        assert!(PhpLintCheck
            .parse_diagnostics(&PathBuf::from("ok.php"), "No syntax errors detected in ok.php\n")
            .is_empty());
    }
}
