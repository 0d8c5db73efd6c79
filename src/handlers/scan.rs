//! The `scan` and `languages` command handlers.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::*;
use log::info;

use crate::cli::OutputFormat;
use crate::error::{InvocationError, Result};
use crate::scanner::model::{Report, Severity};
use crate::scanner::orchestrator::{ScanConfig, ScanOrchestrator};
use crate::scanner::registry::RuleRegistry;
use crate::scanner::report::{render, ReportFormat};

#[allow(clippy::too_many_arguments)]
pub fn handle_scan(
    input: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
    workers: Option<usize>,
    timeout: Option<u64>,
    external_tools: bool,
) -> Result<()> {
    // Progress chatter goes to stderr; stdout is reserved for the report
    // so `--format json` output stays machine-readable.
    eprintln!("🛡️  Scanning: {}", input.display());
    let started = Instant::now();

    let registry = Arc::new(RuleRegistry::build()?);

    let mut config = ScanConfig::default();
    if let Some(workers) = workers {
        config.workers = workers.max(1);
    }
    config.timeout = timeout.map(Duration::from_secs);
    config.external_tools = external_tools;

    let mut orchestrator = ScanOrchestrator::new(registry, config);
    let report = orchestrator.scan(&input)?;

    eprintln!("⚡ Scan completed in {:.2}s", started.elapsed().as_secs_f64());

    let format = ReportFormat::from(format);
    let rendered = render(&report, format)?;

    match output {
        Some(path) => {
            let target = resolve_output_path(path, format)?;
            fs::write(&target, &rendered).map_err(|e| InvocationError::OutputNotWritable {
                path: target.clone(),
                source: e,
            })?;
            println!("Report saved to: {}", target.display());
            print_summary(&report);
        }
        None => {
            io::stdout()
                .write_all(&rendered)
                .map_err(crate::error::CodesweepError::Io)?;
        }
    }

    Ok(())
}

/// A directory output target gets a default report file name inside it.
fn resolve_output_path(path: PathBuf, format: ReportFormat) -> Result<PathBuf> {
    if path.is_dir() {
        let name = match format {
            ReportFormat::Text => "security_report.txt",
            ReportFormat::Json => "security_report.json",
        };
        return Ok(path.join(name));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| InvocationError::OutputNotWritable {
                path: path.clone(),
                source: e,
            })?;
        }
    }
    Ok(path)
}

fn print_summary(report: &Report) {
    let critical = report.severity_counts.get(&Severity::Critical).copied().unwrap_or(0);
    let high = report.severity_counts.get(&Severity::High).copied().unwrap_or(0);

    println!(
        "Findings: {} total ({} critical, {} high) across {} of {} files",
        report.findings.len().to_string().cyan(),
        critical.to_string().bright_red().bold(),
        high.to_string().yellow().bold(),
        report.files_with_findings,
        report.total_files,
    );
    if !report.errors.is_empty() {
        println!("⚠️  {} file(s) could not be scanned", report.errors.len());
    }
}

pub fn handle_languages() -> Result<()> {
    let registry = RuleRegistry::build()?;

    println!("Supported languages:");
    for language in registry.languages() {
        let set = registry.load(language)?;
        info!("{}: {} rules", language, set.len());
        println!("  {:<12} {} rules", language, set.len());
    }
    Ok(())
}
