//! # codesweep
//!
//! A rule-based security scanner that walks a source tree, matches each line
//! of every supported file against per-language regex rule tables, and
//! reports prioritized findings as text or JSON.
//!
//! Supported languages: C, JavaScript/TypeScript, PHP, Python, Rust, and
//! Scala. Rules never execute the code under scan; optional external
//! checkers (`gcc`, `php -l`) can contribute extra diagnostics.
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use codesweep::scanner::{RuleRegistry, ScanConfig, ScanOrchestrator};
//!
//! # fn main() -> codesweep::Result<()> {
//! let registry = Arc::new(RuleRegistry::build()?);
//! let mut orchestrator = ScanOrchestrator::new(registry, ScanConfig::default());
//! let report = orchestrator.scan(std::path::Path::new("./src"))?;
//! println!("{} findings", report.findings.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod handlers;
pub mod scanner;

pub use error::{CodesweepError, ConfigError, InvocationError, Result};
pub use scanner::{Finding, Report, RuleRegistry, ScanConfig, ScanOrchestrator, Severity};

/// Current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
