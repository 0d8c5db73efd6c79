//! # Scanner Module
//!
//! Rule-based security scanning. The pipeline is: the [`RuleRegistry`]
//! compiles per-language rule tables once, the [`ScanOrchestrator`] walks
//! the input and fans files out to a worker pool, each worker matches every
//! line against the file's rule set, and the aggregator folds the outcomes
//! into a deterministic [`Report`] that renders as text or JSON.

pub mod aggregator;
pub mod external;
pub mod file_scanner;
pub mod matcher;
pub mod model;
pub mod orchestrator;
pub mod registry;
pub mod report;

pub(crate) mod rules;

pub use aggregator::aggregate;
pub use external::{default_tools, DiagnosticTool, GccSyntaxCheck, PhpLintCheck};
pub use file_scanner::scan_file;
pub use matcher::match_line;
pub use model::{FileOutcome, Finding, Report, Rule, RuleSet, ScanError, ScanResult, Severity};
pub use orchestrator::{RunState, ScanConfig, ScanOrchestrator};
pub use registry::{language_for_path, RuleRegistry};
pub use report::{parse_json, render, ReportFormat};
